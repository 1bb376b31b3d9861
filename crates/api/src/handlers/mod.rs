pub mod ingress;
pub mod schemas;
