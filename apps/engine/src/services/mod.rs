pub mod table_registry;
