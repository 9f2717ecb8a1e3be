/// Connection to a registry server.
pub mod registry_client;
