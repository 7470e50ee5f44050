//! Core domain model for the edge management node
//!
//! Domain records are short-lived: they are constructed right before
//! conversion to or from the wire representation and discarded after.
//! Bounded fields enforce their capacity at write time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bounded::BoundedVec;

/// Maximum number of DNS server addresses per network configuration.
pub const DNS_SERVERS_MAX: usize = 8;

/// Maximum number of firewall rules per network configuration.
pub const FIREWALL_RULES_MAX: usize = 32;

/// Maximum number of environment variables per instance group.
pub const ENV_VARS_MAX: usize = 32;

/// Maximum number of (filter, variables) groups per override request.
pub const ENV_VARS_INSTANCES_MAX: usize = 64;

/// Identity of a service instance. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceIdent {
    pub service_id: String,
    pub subject_id: String,
    pub instance: u64,
}

/// Structured error descriptor attached to statuses and alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: i32,
    pub exit_code: i32,
    pub message: String,
}

/// Single firewall rule of a network configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub dst_ip: String,
    pub dst_port: String,
    pub proto: String,
    pub src_ip: String,
}

/// Network configuration assigned to an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkParameters {
    pub network_id: String,
    pub subnet: String,
    pub ip: String,
    pub vlan_id: u64,
    pub dns_servers: BoundedVec<String, DNS_SERVERS_MAX>,
    pub firewall_rules: BoundedVec<FirewallRule, FIREWALL_RULES_MAX>,
}

/// Placement parameters for one instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub instance_ident: InstanceIdent,
    pub uid: u32,
    pub priority: u64,
    pub storage_path: String,
    pub state_path: String,
    pub network_parameters: NetworkParameters,
}

/// Run state of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Active,
    Failed,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Active => write!(f, "active"),
            RunState::Failed => write!(f, "failed"),
        }
    }
}

/// Current status of a running instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceStatus {
    pub instance_ident: InstanceIdent,
    pub service_version: String,
    pub run_state: RunState,
    pub error: Option<ErrorInfo>,
}

/// Selector over instances. All fields are independently optional;
/// a filter with every field absent matches everything. Instance
/// ordinal 0 is a valid value, distinct from "no filter on instance".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFilter {
    pub service_id: Option<String>,
    pub subject_id: Option<String>,
    pub instance: Option<u64>,
}

impl InstanceFilter {
    /// Whether the given identity passes every present field.
    pub fn matches(&self, ident: &InstanceIdent) -> bool {
        self.service_id
            .as_ref()
            .map_or(true, |id| *id == ident.service_id)
            && self
                .subject_id
                .as_ref()
                .map_or(true, |id| *id == ident.subject_id)
            && self.instance.map_or(true, |i| i == ident.instance)
    }
}

/// Content-addressed service artifact descriptor.
///
/// `sha256` is the raw 32-byte digest, never a printable string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service_id: String,
    pub provider_id: String,
    pub version: String,
    pub gid: u32,
    pub url: String,
    pub sha256: Vec<u8>,
    pub size: u64,
}

/// Content-addressed layer artifact descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerInfo {
    pub layer_id: String,
    pub digest: String,
    pub version: String,
    pub url: String,
    pub sha256: Vec<u8>,
    pub size: u64,
}

/// Per-partition disk usage inside a monitoring sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionUsage {
    pub name: String,
    pub used_size: u64,
}

/// Resource usage sample for one measurement window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitoringData {
    pub ram: u64,
    pub cpu: f64,
    pub download: u64,
    pub upload: u64,
    pub partitions: Vec<PartitionUsage>,
}

/// Monitoring sample of a single instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceMonitoring {
    pub instance_ident: InstanceIdent,
    pub monitoring_data: MonitoringData,
}

/// Node-level monitoring aggregate: the node sample plus per-instance
/// samples sharing one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMonitoringData {
    pub timestamp: DateTime<Utc>,
    pub monitoring_data: MonitoringData,
    pub service_instances: Vec<InstanceMonitoring>,
}

/// Environment variable with an optional expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarInfo {
    pub name: String,
    pub value: String,
    pub ttl: Option<DateTime<Utc>>,
}

/// Environment variables targeted at the instances matching a filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvVarsInstanceInfo {
    pub filter: InstanceFilter,
    pub variables: BoundedVec<EnvVarInfo, ENV_VARS_MAX>,
}

/// Collection of per-filter environment variable groups.
pub type EnvVarsInstanceInfoArray = BoundedVec<EnvVarsInstanceInfo, ENV_VARS_INSTANCES_MAX>;

/// Application result for one overridden environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarStatus {
    pub name: String,
    pub error: Option<ErrorInfo>,
}

/// Time-range selector of a log request, with an instance filter for
/// instance and crash log requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    pub from: Option<DateTime<Utc>>,
    pub till: Option<DateTime<Utc>>,
    pub instance_filter: InstanceFilter,
}

/// Log retrieval request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLog {
    pub log_id: String,
    pub filter: LogFilter,
}

/// Delivery state of a pushed log part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Ok,
    Error,
    Empty,
    Absent,
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogStatus::Ok => write!(f, "ok"),
            LogStatus::Error => write!(f, "error"),
            LogStatus::Empty => write!(f, "empty"),
            LogStatus::Absent => write!(f, "absent"),
        }
    }
}

/// One part of collected log content pushed to the management service.
///
/// `content` is raw bytes and is carried without re-encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushLog {
    pub log_id: String,
    pub part_count: u64,
    pub part: u64,
    pub content: Vec<u8>,
    pub status: LogStatus,
    pub error: Option<ErrorInfo>,
}

/// Core component an alert originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreComponent {
    ServiceManager,
    UpdateManager,
    MonitoringManager,
}

impl std::fmt::Display for CoreComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreComponent::ServiceManager => write!(f, "servicemanager"),
            CoreComponent::UpdateManager => write!(f, "updatemanager"),
            CoreComponent::MonitoringManager => write!(f, "monitoringmanager"),
        }
    }
}

/// State of a quota alert relative to its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Raise,
    Continue,
    Fall,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::Raise => write!(f, "raise"),
            AlertStatus::Continue => write!(f, "continue"),
            AlertStatus::Fall => write!(f, "fall"),
        }
    }
}

/// Header shared by every alert variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertHeader {
    pub tag: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAlert {
    pub header: AlertHeader,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreAlert {
    pub header: AlertHeader,
    pub core_component: CoreComponent,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemQuotaAlert {
    pub header: AlertHeader,
    pub parameter: String,
    pub value: u64,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceQuotaAlert {
    pub header: AlertHeader,
    pub instance_ident: InstanceIdent,
    pub parameter: String,
    pub value: u64,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAllocateAlert {
    pub header: AlertHeader,
    pub instance_ident: InstanceIdent,
    pub device: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceValidateAlert {
    pub header: AlertHeader,
    pub name: String,
    pub errors: Vec<ErrorInfo>,
}

/// Header-only alert about a download in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadAlert {
    pub header: AlertHeader,
}

/// Header-only alert about a service instance state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstanceAlert {
    pub header: AlertHeader,
}

/// Closed set of outbound alert kinds.
///
/// Adding a variant without updating every `match` over this enum is a
/// compile error, which keeps the wire dispatch exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertVariant {
    System(SystemAlert),
    Core(CoreAlert),
    SystemQuota(SystemQuotaAlert),
    InstanceQuota(InstanceQuotaAlert),
    DeviceAllocate(DeviceAllocateAlert),
    ResourceValidate(ResourceValidateAlert),
    Download(DownloadAlert),
    ServiceInstance(ServiceInstanceAlert),
}

impl AlertVariant {
    /// Shared header of the variant.
    pub fn header(&self) -> &AlertHeader {
        match self {
            AlertVariant::System(a) => &a.header,
            AlertVariant::Core(a) => &a.header,
            AlertVariant::SystemQuota(a) => &a.header,
            AlertVariant::InstanceQuota(a) => &a.header,
            AlertVariant::DeviceAllocate(a) => &a.header,
            AlertVariant::ResourceValidate(a) => &a.header,
            AlertVariant::Download(a) => &a.header,
            AlertVariant::ServiceInstance(a) => &a.header,
        }
    }
}

/// Key/value permission entry of a functional service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermKeyValue {
    pub key: String,
    pub value: String,
}

/// Permissions an instance holds towards one functional service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalServicePermissions {
    pub name: String,
    pub permissions: Vec<PermKeyValue>,
}
