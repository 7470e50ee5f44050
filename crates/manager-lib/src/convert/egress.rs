//! Domain -> wire conversions
//!
//! Field copies are byte-for-byte for scalars, strings and digests.
//! Optional error descriptors populate the wire field only when the
//! domain error is present; absent errors leave the field cleared.

use chrono::{DateTime, Utc};

use crate::convert::{optional, time};
use crate::models::{
    EnvVarStatus, ErrorInfo, FunctionalServicePermissions, InstanceFilter, InstanceIdent,
    InstanceStatus, MonitoringData, NodeMonitoringData, PushLog,
};
use crate::proto::iam::v1 as pb_iam;
use crate::proto::servicemanager::v1 as pb;

pub fn instance_ident_to_wire(src: &InstanceIdent) -> pb::InstanceIdent {
    pb::InstanceIdent {
        service_id: src.service_id.clone(),
        subject_id: src.subject_id.clone(),
        instance: src.instance,
    }
}

pub fn error_info_to_wire(src: &ErrorInfo) -> pb::ErrorInfo {
    pb::ErrorInfo {
        code: src.code,
        exit_code: src.exit_code,
        message: src.message.clone(),
    }
}

/// Populates a wire error field only for a present domain error.
fn error_info_opt_to_wire(src: Option<&ErrorInfo>) -> Option<pb::ErrorInfo> {
    src.map(error_info_to_wire)
}

pub fn push_log_to_wire(src: &PushLog) -> pb::LogData {
    pb::LogData {
        log_id: src.log_id.clone(),
        part_count: src.part_count,
        part: src.part,
        data: src.content.clone(),
        status: src.status.to_string(),
        error_info: error_info_opt_to_wire(src.error.as_ref()),
    }
}

pub fn monitoring_data_to_wire(
    src: &MonitoringData,
    timestamp: DateTime<Utc>,
) -> pb::MonitoringData {
    pb::MonitoringData {
        ram: src.ram,
        cpu: src.cpu as u64,
        download: src.download,
        upload: src.upload,
        timestamp: Some(time::to_wire(timestamp)),
        partitions: src
            .partitions
            .iter()
            .map(|partition| pb::PartitionUsage {
                name: partition.name.clone(),
                used_size: partition.used_size,
            })
            .collect(),
    }
}

fn instances_monitoring_to_wire(src: &NodeMonitoringData) -> Vec<pb::InstanceMonitoring> {
    src.service_instances
        .iter()
        .map(|instance| pb::InstanceMonitoring {
            instance: Some(instance_ident_to_wire(&instance.instance_ident)),
            monitoring_data: Some(monitoring_data_to_wire(
                &instance.monitoring_data,
                src.timestamp,
            )),
        })
        .collect()
}

pub fn average_monitoring_to_wire(src: &NodeMonitoringData) -> pb::AverageMonitoring {
    pb::AverageMonitoring {
        node_monitoring: Some(monitoring_data_to_wire(&src.monitoring_data, src.timestamp)),
        instances_monitoring: instances_monitoring_to_wire(src),
    }
}

pub fn instant_monitoring_to_wire(src: &NodeMonitoringData) -> pb::InstantMonitoring {
    pb::InstantMonitoring {
        node_monitoring: Some(monitoring_data_to_wire(&src.monitoring_data, src.timestamp)),
        instances_monitoring: instances_monitoring_to_wire(src),
    }
}

/// Instance status egress does not carry error detail: the wire error
/// field is left cleared regardless of the domain error. Error detail
/// for failed instances travels through the alert channel instead.
pub fn instance_status_to_wire(src: &InstanceStatus) -> pb::InstanceStatus {
    pb::InstanceStatus {
        instance: Some(instance_ident_to_wire(&src.instance_ident)),
        service_version: src.service_version.clone(),
        run_state: src.run_state.to_string(),
        error_info: None,
    }
}

pub fn instance_filter_to_wire(src: &InstanceFilter) -> pb::InstanceFilter {
    pb::InstanceFilter {
        service_id: optional::string_to_wire(src.service_id.as_deref()),
        subject_id: optional::string_to_wire(src.subject_id.as_deref()),
        instance: optional::instance_to_wire(src.instance),
    }
}

pub fn env_var_status_to_wire(src: &EnvVarStatus) -> pb::EnvVarStatus {
    pb::EnvVarStatus {
        name: src.name.clone(),
        error_info: error_info_opt_to_wire(src.error.as_ref()),
    }
}

pub fn register_instance_request_to_wire(
    ident: &InstanceIdent,
    permissions: &[FunctionalServicePermissions],
) -> pb_iam::RegisterInstanceRequest {
    pb_iam::RegisterInstanceRequest {
        instance: Some(instance_ident_to_wire(ident)),
        permissions: permissions
            .iter()
            .map(|service| {
                (
                    service.name.clone(),
                    pb_iam::Permissions {
                        permissions: service
                            .permissions
                            .iter()
                            .map(|entry| (entry.key.clone(), entry.value.clone()))
                            .collect(),
                    },
                )
            })
            .collect(),
    }
}
