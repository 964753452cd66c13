mod identity_assertion;
mod resolution;
mod trusted_proxy;
mod variable_source;
