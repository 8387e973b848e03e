//! Deployment migrations, in execution order.

pub mod deploy_conference;
