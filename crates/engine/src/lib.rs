pub mod eip155;
pub mod query;
pub mod reconciler;
pub mod validator;
