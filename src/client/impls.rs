/// Request methods of `RegistryClient`.
pub mod registry_client;
