//! Domain/wire conversion layer
//!
//! This module maps domain records onto their wire counterparts and
//! back:
//! - `egress`: domain -> wire for outbound statuses, monitoring
//!   samples, filters and pushed logs
//! - `ingress`: wire -> domain with validation for inbound placements,
//!   artifact descriptors, env var overrides and log requests
//! - `alert`: one-way dispatch of the closed alert set onto the
//!   discriminated wire alert message
//! - `time`: the single point of timestamp translation
//! - `optional`: sentinel encoding of optional filter fields
//!
//! Every conversion is a pure, synchronous function of its input. The
//! first failure stops the conversion and is returned as-is.

pub mod alert;
pub mod egress;
pub mod ingress;
pub mod optional;
pub mod time;

pub use alert::alert_to_wire;
pub use egress::{
    average_monitoring_to_wire, env_var_status_to_wire, error_info_to_wire,
    instance_filter_to_wire, instance_ident_to_wire, instance_status_to_wire,
    instant_monitoring_to_wire, monitoring_data_to_wire, push_log_to_wire,
    register_instance_request_to_wire,
};
pub use ingress::{
    env_var_info_from_wire, instance_crash_log_request_from_wire, instance_filter_from_wire,
    instance_ident_from_wire, instance_info_from_wire, instance_log_request_from_wire,
    layer_info_from_wire, network_parameters_from_wire, override_env_vars_from_wire,
    service_info_from_wire, system_log_request_from_wire,
};
