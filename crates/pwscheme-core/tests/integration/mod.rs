mod dispatch_roundtrip;
mod plugin_registry;
