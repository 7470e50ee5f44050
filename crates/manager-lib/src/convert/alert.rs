//! Alert dispatch onto the wire one-of payload
//!
//! Alerts are outbound telemetry only; there is no wire -> domain
//! decoder. The `match` below is statically exhaustive over
//! [`AlertVariant`], so a new variant without a conversion arm is a
//! compile error.

use crate::convert::egress::{error_info_to_wire, instance_ident_to_wire};
use crate::convert::time;
use crate::models::{AlertHeader, AlertVariant};
use crate::proto::servicemanager::v1 as pb;

/// Builds the wire alert shell shared by every variant.
fn alert_with_header(header: &AlertHeader) -> pb::Alert {
    pb::Alert {
        tag: header.tag.clone(),
        timestamp: Some(time::to_wire(header.timestamp)),
        payload: None,
    }
}

/// Maps a domain alert onto the discriminated wire message. Exactly
/// one payload field is populated per variant; `Download` and
/// `ServiceInstance` are header-only by contract.
pub fn alert_to_wire(src: &AlertVariant) -> pb::Alert {
    let mut result = alert_with_header(src.header());

    result.payload = match src {
        AlertVariant::System(alert) => Some(pb::alert::Payload::SystemAlert(pb::SystemAlert {
            message: alert.message.clone(),
        })),
        AlertVariant::Core(alert) => Some(pb::alert::Payload::CoreAlert(pb::CoreAlert {
            core_component: alert.core_component.to_string(),
            message: alert.message.clone(),
        })),
        AlertVariant::SystemQuota(alert) => {
            Some(pb::alert::Payload::SystemQuotaAlert(pb::SystemQuotaAlert {
                parameter: alert.parameter.clone(),
                value: alert.value,
                status: alert.status.to_string(),
            }))
        }
        AlertVariant::InstanceQuota(alert) => Some(pb::alert::Payload::InstanceQuotaAlert(
            pb::InstanceQuotaAlert {
                instance: Some(instance_ident_to_wire(&alert.instance_ident)),
                parameter: alert.parameter.clone(),
                value: alert.value,
                status: alert.status.to_string(),
            },
        )),
        AlertVariant::DeviceAllocate(alert) => Some(pb::alert::Payload::DeviceAllocateAlert(
            pb::DeviceAllocateAlert {
                instance: Some(instance_ident_to_wire(&alert.instance_ident)),
                device: alert.device.clone(),
                message: alert.message.clone(),
            },
        )),
        AlertVariant::ResourceValidate(alert) => Some(pb::alert::Payload::ResourceValidateAlert(
            pb::ResourceValidateAlert {
                name: alert.name.clone(),
                errors: alert.errors.iter().map(error_info_to_wire).collect(),
            },
        )),
        AlertVariant::Download(_) => None,
        AlertVariant::ServiceInstance(_) => None,
    };

    result
}
