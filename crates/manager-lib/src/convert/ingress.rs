//! Wire -> domain conversions
//!
//! Inbound messages are validated while they are mapped: bounded
//! collections fail fast with the name of the oversized collection,
//! and malformed timestamps surface as field errors. The first failure
//! stops the conversion; partially filled records are discarded by the
//! caller.

use crate::bounded::transfer_all;
use crate::convert::{optional, time};
use crate::error::ConversionError;
use crate::models::{
    EnvVarInfo, EnvVarsInstanceInfo, EnvVarsInstanceInfoArray, FirewallRule, InstanceFilter,
    InstanceIdent, InstanceInfo, LayerInfo, NetworkParameters, RequestLog, ServiceInfo,
};
use crate::proto::servicemanager::v1 as pb;

pub fn instance_ident_from_wire(src: &pb::InstanceIdent) -> InstanceIdent {
    InstanceIdent {
        service_id: src.service_id.clone(),
        subject_id: src.subject_id.clone(),
        instance: src.instance,
    }
}

pub fn network_parameters_from_wire(
    src: &pb::NetworkParameters,
) -> Result<NetworkParameters, ConversionError> {
    let mut dst = NetworkParameters {
        network_id: src.network_id.clone(),
        subnet: src.subnet.clone(),
        ip: src.ip.clone(),
        vlan_id: src.vlan_id,
        ..Default::default()
    };

    transfer_all(
        src.dns_servers.iter().cloned(),
        &mut dst.dns_servers,
        "network parameters dns servers",
    )?;

    transfer_all(
        src.rules.iter().map(|rule| FirewallRule {
            dst_ip: rule.dst_ip.clone(),
            dst_port: rule.dst_port.clone(),
            proto: rule.proto.clone(),
            src_ip: rule.src_ip.clone(),
        }),
        &mut dst.firewall_rules,
        "network parameters rules",
    )?;

    Ok(dst)
}

pub fn instance_info_from_wire(src: &pb::InstanceInfo) -> Result<InstanceInfo, ConversionError> {
    Ok(InstanceInfo {
        instance_ident: src
            .instance
            .as_ref()
            .map(instance_ident_from_wire)
            .unwrap_or_default(),
        uid: src.uid,
        priority: src.priority,
        storage_path: src.storage_path.clone(),
        state_path: src.state_path.clone(),
        network_parameters: src
            .network_parameters
            .as_ref()
            .map(network_parameters_from_wire)
            .transpose()?
            .unwrap_or_default(),
    })
}

pub fn instance_filter_from_wire(src: &pb::InstanceFilter) -> InstanceFilter {
    InstanceFilter {
        service_id: optional::string_from_wire(&src.service_id),
        subject_id: optional::string_from_wire(&src.subject_id),
        instance: optional::instance_from_wire(src.instance),
    }
}

pub fn env_var_info_from_wire(src: &pb::EnvVarInfo) -> Result<EnvVarInfo, ConversionError> {
    Ok(EnvVarInfo {
        name: src.name.clone(),
        value: src.value.clone(),
        ttl: time::from_wire_opt(src.ttl.as_ref())?,
    })
}

/// Converts an override request into per-filter variable groups. Both
/// the inner variable lists and the outer group list are bounded; a
/// request with zero groups is valid and yields an empty array.
pub fn override_env_vars_from_wire(
    src: &pb::OverrideEnvVars,
) -> Result<EnvVarsInstanceInfoArray, ConversionError> {
    let mut groups = Vec::with_capacity(src.env_vars.len());

    for env_var in &src.env_vars {
        let mut group = EnvVarsInstanceInfo {
            filter: env_var
                .instance_filter
                .as_ref()
                .map(instance_filter_from_wire)
                .unwrap_or_default(),
            ..Default::default()
        };

        transfer_all(
            env_var
                .variables
                .iter()
                .map(env_var_info_from_wire)
                .collect::<Result<Vec<_>, _>>()?,
            &mut group.variables,
            "instance's env vars",
        )?;

        groups.push(group);
    }

    let mut dst = EnvVarsInstanceInfoArray::new();
    transfer_all(groups, &mut dst, "env vars instances")?;

    Ok(dst)
}

pub fn service_info_from_wire(src: &pb::ServiceInfo) -> ServiceInfo {
    ServiceInfo {
        service_id: src.service_id.clone(),
        provider_id: src.provider_id.clone(),
        version: src.version.clone(),
        gid: src.gid,
        url: src.url.clone(),
        sha256: src.sha256.clone(),
        size: src.size,
    }
}

pub fn layer_info_from_wire(src: &pb::LayerInfo) -> LayerInfo {
    LayerInfo {
        layer_id: src.layer_id.clone(),
        digest: src.digest.clone(),
        version: src.version.clone(),
        url: src.url.clone(),
        sha256: src.sha256.clone(),
        size: src.size,
    }
}

pub fn system_log_request_from_wire(
    src: &pb::SystemLogRequest,
) -> Result<RequestLog, ConversionError> {
    let mut dst = RequestLog {
        log_id: src.log_id.clone(),
        ..Default::default()
    };

    dst.filter.from = time::from_wire_opt(src.from.as_ref())?;
    dst.filter.till = time::from_wire_opt(src.till.as_ref())?;

    Ok(dst)
}

pub fn instance_log_request_from_wire(
    src: &pb::InstanceLogRequest,
) -> Result<RequestLog, ConversionError> {
    let mut dst = RequestLog {
        log_id: src.log_id.clone(),
        ..Default::default()
    };

    dst.filter.from = time::from_wire_opt(src.from.as_ref())?;
    dst.filter.till = time::from_wire_opt(src.till.as_ref())?;
    dst.filter.instance_filter = src
        .instance_filter
        .as_ref()
        .map(instance_filter_from_wire)
        .unwrap_or_default();

    Ok(dst)
}

pub fn instance_crash_log_request_from_wire(
    src: &pb::InstanceCrashLogRequest,
) -> Result<RequestLog, ConversionError> {
    let mut dst = RequestLog {
        log_id: src.log_id.clone(),
        ..Default::default()
    };

    dst.filter.from = time::from_wire_opt(src.from.as_ref())?;
    dst.filter.till = time::from_wire_opt(src.till.as_ref())?;
    dst.filter.instance_filter = src
        .instance_filter
        .as_ref()
        .map(instance_filter_from_wire)
        .unwrap_or_default();

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::egress::instance_filter_to_wire;
    use crate::models::{DNS_SERVERS_MAX, ENV_VARS_INSTANCES_MAX, ENV_VARS_MAX};

    fn wire_network_parameters(dns_count: usize, rule_count: usize) -> pb::NetworkParameters {
        pb::NetworkParameters {
            network_id: "net0".to_string(),
            subnet: "172.17.0.0/16".to_string(),
            ip: "172.17.0.5".to_string(),
            vlan_id: 42,
            dns_servers: (0..dns_count).map(|i| format!("10.0.0.{i}")).collect(),
            rules: (0..rule_count)
                .map(|i| pb::FirewallRule {
                    dst_ip: format!("10.1.0.{i}"),
                    dst_port: "443".to_string(),
                    proto: "tcp".to_string(),
                    src_ip: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_network_parameters_within_limits() {
        let wire = wire_network_parameters(DNS_SERVERS_MAX, 2);
        let params = network_parameters_from_wire(&wire).unwrap();

        assert_eq!(params.network_id, "net0");
        assert_eq!(params.vlan_id, 42);
        assert_eq!(params.dns_servers.len(), DNS_SERVERS_MAX);
        assert_eq!(params.dns_servers[0], "10.0.0.0");
        assert_eq!(params.firewall_rules[1].dst_ip, "10.1.0.1");
    }

    #[test]
    fn test_dns_servers_overflow() {
        let wire = wire_network_parameters(DNS_SERVERS_MAX + 1, 0);
        let err = network_parameters_from_wire(&wire).unwrap_err();
        assert_eq!(
            err,
            ConversionError::CapacityExceeded {
                context: "network parameters dns servers".to_string()
            }
        );
    }

    #[test]
    fn test_firewall_rules_overflow() {
        let wire = wire_network_parameters(0, crate::models::FIREWALL_RULES_MAX + 1);
        let err = network_parameters_from_wire(&wire).unwrap_err();
        assert_eq!(
            err,
            ConversionError::CapacityExceeded {
                context: "network parameters rules".to_string()
            }
        );
    }

    #[test]
    fn test_instance_info_nested_failure_propagates() {
        let wire = pb::InstanceInfo {
            instance: Some(pb::InstanceIdent {
                service_id: "svcA".to_string(),
                subject_id: "subj1".to_string(),
                instance: 0,
            }),
            uid: 1000,
            priority: 50,
            storage_path: "/var/storage".to_string(),
            state_path: "/var/state".to_string(),
            network_parameters: Some(wire_network_parameters(DNS_SERVERS_MAX + 1, 0)),
        };

        let err = instance_info_from_wire(&wire).unwrap_err();
        assert!(matches!(err, ConversionError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_instance_info_fields_copied() {
        let wire = pb::InstanceInfo {
            instance: Some(pb::InstanceIdent {
                service_id: "svcA".to_string(),
                subject_id: "subj1".to_string(),
                instance: 2,
            }),
            uid: 1000,
            priority: 50,
            storage_path: "/var/storage".to_string(),
            state_path: "/var/state".to_string(),
            network_parameters: Some(wire_network_parameters(1, 1)),
        };

        let info = instance_info_from_wire(&wire).unwrap();
        assert_eq!(info.instance_ident.instance, 2);
        assert_eq!(info.uid, 1000);
        assert_eq!(info.priority, 50);
        assert_eq!(info.storage_path, "/var/storage");
        assert_eq!(info.network_parameters.dns_servers.len(), 1);
    }

    #[test]
    fn test_filter_round_trip_fully_specified() {
        let filter = InstanceFilter {
            service_id: Some("svcA".to_string()),
            subject_id: Some("subj1".to_string()),
            instance: Some(0),
        };
        assert_eq!(
            instance_filter_from_wire(&instance_filter_to_wire(&filter)),
            filter
        );
    }

    #[test]
    fn test_filter_sentinel_decodes_to_absent() {
        let wire = pb::InstanceFilter {
            service_id: String::new(),
            subject_id: String::new(),
            instance: -1,
        };
        assert_eq!(instance_filter_from_wire(&wire), InstanceFilter::default());
    }

    #[test]
    fn test_service_info_digest_byte_fidelity() {
        let mut sha256 = vec![0u8; 32];
        sha256[0] = 0x00;
        sha256[1] = 0xff;
        sha256[31] = 0x00;

        let wire = pb::ServiceInfo {
            service_id: "svcA".to_string(),
            provider_id: "provider".to_string(),
            version: "2.0.0".to_string(),
            gid: 1001,
            url: "https://artifacts/svcA".to_string(),
            sha256: sha256.clone(),
            size: 1 << 20,
        };

        let info = service_info_from_wire(&wire);
        assert_eq!(info.sha256, sha256);
        assert_eq!(info.sha256.len(), 32);
        assert_eq!(info.gid, 1001);
    }

    #[test]
    fn test_layer_info_fields_copied() {
        let wire = pb::LayerInfo {
            layer_id: "layer1".to_string(),
            digest: "sha256:abc".to_string(),
            version: "1.0.0".to_string(),
            url: "https://artifacts/layer1".to_string(),
            sha256: vec![0xde, 0xad, 0xbe, 0xef],
            size: 4096,
        };

        let info = layer_info_from_wire(&wire);
        assert_eq!(info.layer_id, "layer1");
        assert_eq!(info.digest, "sha256:abc");
        assert_eq!(info.sha256, vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_override_env_vars_empty_is_valid() {
        let wire = pb::OverrideEnvVars { env_vars: Vec::new() };
        let groups = override_env_vars_from_wire(&wire).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_override_env_vars_groups_converted() {
        let wire = pb::OverrideEnvVars {
            env_vars: vec![pb::EnvVarsInstanceInfo {
                instance_filter: Some(pb::InstanceFilter {
                    service_id: "svcA".to_string(),
                    subject_id: String::new(),
                    instance: -1,
                }),
                variables: vec![pb::EnvVarInfo {
                    name: "LOG_LEVEL".to_string(),
                    value: "debug".to_string(),
                    ttl: None,
                }],
            }],
        };

        let groups = override_env_vars_from_wire(&wire).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].filter.service_id.as_deref(), Some("svcA"));
        assert_eq!(groups[0].filter.instance, None);
        assert_eq!(groups[0].variables[0].name, "LOG_LEVEL");
        assert_eq!(groups[0].variables[0].ttl, None);
    }

    #[test]
    fn test_override_env_vars_inner_overflow() {
        let wire = pb::OverrideEnvVars {
            env_vars: vec![pb::EnvVarsInstanceInfo {
                instance_filter: None,
                variables: (0..ENV_VARS_MAX + 1)
                    .map(|i| pb::EnvVarInfo {
                        name: format!("VAR_{i}"),
                        value: String::new(),
                        ttl: None,
                    })
                    .collect(),
            }],
        };

        let err = override_env_vars_from_wire(&wire).unwrap_err();
        assert_eq!(
            err,
            ConversionError::CapacityExceeded {
                context: "instance's env vars".to_string()
            }
        );
    }

    #[test]
    fn test_override_env_vars_outer_overflow() {
        let wire = pb::OverrideEnvVars {
            env_vars: (0..ENV_VARS_INSTANCES_MAX + 1)
                .map(|_| pb::EnvVarsInstanceInfo {
                    instance_filter: None,
                    variables: Vec::new(),
                })
                .collect(),
        };

        let err = override_env_vars_from_wire(&wire).unwrap_err();
        assert_eq!(
            err,
            ConversionError::CapacityExceeded {
                context: "env vars instances".to_string()
            }
        );
    }

    #[test]
    fn test_system_log_request() {
        let from = prost_types::Timestamp {
            seconds: 1_700_000_000,
            nanos: 0,
        };
        let wire = pb::SystemLogRequest {
            log_id: "log-1".to_string(),
            from: Some(from),
            till: None,
        };

        let request = system_log_request_from_wire(&wire).unwrap();
        assert_eq!(request.log_id, "log-1");
        assert_eq!(request.filter.from.unwrap().timestamp(), 1_700_000_000);
        assert!(request.filter.till.is_none());
        assert_eq!(request.filter.instance_filter, InstanceFilter::default());
    }

    #[test]
    fn test_instance_log_request_carries_nested_filter() {
        let wire = pb::InstanceLogRequest {
            log_id: "log-2".to_string(),
            instance_filter: Some(pb::InstanceFilter {
                service_id: "svcA".to_string(),
                subject_id: "subj1".to_string(),
                instance: 0,
            }),
            from: None,
            till: None,
        };

        let request = instance_log_request_from_wire(&wire).unwrap();
        assert_eq!(request.log_id, "log-2");
        assert_eq!(
            request.filter.instance_filter.service_id.as_deref(),
            Some("svcA")
        );
        assert_eq!(request.filter.instance_filter.instance, Some(0));
    }

    #[test]
    fn test_crash_log_request_carries_nested_filter() {
        let wire = pb::InstanceCrashLogRequest {
            log_id: "log-3".to_string(),
            instance_filter: Some(pb::InstanceFilter {
                service_id: String::new(),
                subject_id: "subj1".to_string(),
                instance: -1,
            }),
            from: None,
            till: None,
        };

        let request = instance_crash_log_request_from_wire(&wire).unwrap();
        assert_eq!(
            request.filter.instance_filter.subject_id.as_deref(),
            Some("subj1")
        );
        assert!(request.filter.instance_filter.service_id.is_none());
        assert!(request.filter.instance_filter.instance.is_none());
    }
}
