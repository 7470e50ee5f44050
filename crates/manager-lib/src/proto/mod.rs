//! Wire schema types
//!
//! Hand-written prost messages for the management service wire format,
//! byte-compatible with the externally defined schema. Two namespaces:
//! - `servicemanager.v1`: instance, artifact, monitoring, env var, log
//!   and alert messages exchanged with the remote management service
//! - `iam.v1`: permissions registration service messages and client
//!
//! Keeping the definitions in Rust avoids a protoc build dependency;
//! field tags are the schema contract and must not be renumbered.

pub mod servicemanager {
    pub mod v1 {
        use prost::Message;

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceIdent {
            #[prost(string, tag = "1")]
            pub service_id: String,
            #[prost(string, tag = "2")]
            pub subject_id: String,
            #[prost(uint64, tag = "3")]
            pub instance: u64,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct ErrorInfo {
            #[prost(int32, tag = "1")]
            pub code: i32,
            #[prost(int32, tag = "2")]
            pub exit_code: i32,
            #[prost(string, tag = "3")]
            pub message: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct FirewallRule {
            #[prost(string, tag = "1")]
            pub dst_ip: String,
            #[prost(string, tag = "2")]
            pub dst_port: String,
            #[prost(string, tag = "3")]
            pub proto: String,
            #[prost(string, tag = "4")]
            pub src_ip: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct NetworkParameters {
            #[prost(string, tag = "1")]
            pub network_id: String,
            #[prost(string, tag = "2")]
            pub subnet: String,
            #[prost(string, tag = "3")]
            pub ip: String,
            #[prost(uint64, tag = "4")]
            pub vlan_id: u64,
            #[prost(string, repeated, tag = "5")]
            pub dns_servers: Vec<String>,
            #[prost(message, repeated, tag = "6")]
            pub rules: Vec<FirewallRule>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceInfo {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
            #[prost(uint32, tag = "2")]
            pub uid: u32,
            #[prost(uint64, tag = "3")]
            pub priority: u64,
            #[prost(string, tag = "4")]
            pub storage_path: String,
            #[prost(string, tag = "5")]
            pub state_path: String,
            #[prost(message, optional, tag = "6")]
            pub network_parameters: Option<NetworkParameters>,
        }

        /// Instance selector. An absent ordinal is encoded as `-1`;
        /// absent string fields are encoded as empty strings.
        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceFilter {
            #[prost(string, tag = "1")]
            pub service_id: String,
            #[prost(string, tag = "2")]
            pub subject_id: String,
            #[prost(int64, tag = "3")]
            pub instance: i64,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceStatus {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
            #[prost(string, tag = "2")]
            pub service_version: String,
            #[prost(string, tag = "3")]
            pub run_state: String,
            #[prost(message, optional, tag = "4")]
            pub error_info: Option<ErrorInfo>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct ServiceInfo {
            #[prost(string, tag = "1")]
            pub service_id: String,
            #[prost(string, tag = "2")]
            pub provider_id: String,
            #[prost(string, tag = "3")]
            pub version: String,
            #[prost(uint32, tag = "4")]
            pub gid: u32,
            #[prost(string, tag = "5")]
            pub url: String,
            #[prost(bytes = "vec", tag = "6")]
            pub sha256: Vec<u8>,
            #[prost(uint64, tag = "7")]
            pub size: u64,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct LayerInfo {
            #[prost(string, tag = "1")]
            pub layer_id: String,
            #[prost(string, tag = "2")]
            pub digest: String,
            #[prost(string, tag = "3")]
            pub version: String,
            #[prost(string, tag = "4")]
            pub url: String,
            #[prost(bytes = "vec", tag = "5")]
            pub sha256: Vec<u8>,
            #[prost(uint64, tag = "6")]
            pub size: u64,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct PartitionUsage {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(uint64, tag = "2")]
            pub used_size: u64,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct MonitoringData {
            #[prost(uint64, tag = "1")]
            pub ram: u64,
            #[prost(uint64, tag = "2")]
            pub cpu: u64,
            #[prost(uint64, tag = "3")]
            pub download: u64,
            #[prost(uint64, tag = "4")]
            pub upload: u64,
            #[prost(message, optional, tag = "5")]
            pub timestamp: Option<prost_types::Timestamp>,
            #[prost(message, repeated, tag = "6")]
            pub partitions: Vec<PartitionUsage>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceMonitoring {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
            #[prost(message, optional, tag = "2")]
            pub monitoring_data: Option<MonitoringData>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct AverageMonitoring {
            #[prost(message, optional, tag = "1")]
            pub node_monitoring: Option<MonitoringData>,
            #[prost(message, repeated, tag = "2")]
            pub instances_monitoring: Vec<InstanceMonitoring>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstantMonitoring {
            #[prost(message, optional, tag = "1")]
            pub node_monitoring: Option<MonitoringData>,
            #[prost(message, repeated, tag = "2")]
            pub instances_monitoring: Vec<InstanceMonitoring>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct EnvVarInfo {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(string, tag = "2")]
            pub value: String,
            #[prost(message, optional, tag = "3")]
            pub ttl: Option<prost_types::Timestamp>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct EnvVarsInstanceInfo {
            #[prost(message, optional, tag = "1")]
            pub instance_filter: Option<InstanceFilter>,
            #[prost(message, repeated, tag = "2")]
            pub variables: Vec<EnvVarInfo>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct OverrideEnvVars {
            #[prost(message, repeated, tag = "1")]
            pub env_vars: Vec<EnvVarsInstanceInfo>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct EnvVarStatus {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(message, optional, tag = "2")]
            pub error_info: Option<ErrorInfo>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct LogData {
            #[prost(string, tag = "1")]
            pub log_id: String,
            #[prost(uint64, tag = "2")]
            pub part_count: u64,
            #[prost(uint64, tag = "3")]
            pub part: u64,
            #[prost(bytes = "vec", tag = "4")]
            pub data: Vec<u8>,
            #[prost(string, tag = "5")]
            pub status: String,
            #[prost(message, optional, tag = "6")]
            pub error_info: Option<ErrorInfo>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct SystemLogRequest {
            #[prost(string, tag = "1")]
            pub log_id: String,
            #[prost(message, optional, tag = "2")]
            pub from: Option<prost_types::Timestamp>,
            #[prost(message, optional, tag = "3")]
            pub till: Option<prost_types::Timestamp>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceLogRequest {
            #[prost(string, tag = "1")]
            pub log_id: String,
            #[prost(message, optional, tag = "2")]
            pub instance_filter: Option<InstanceFilter>,
            #[prost(message, optional, tag = "3")]
            pub from: Option<prost_types::Timestamp>,
            #[prost(message, optional, tag = "4")]
            pub till: Option<prost_types::Timestamp>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceCrashLogRequest {
            #[prost(string, tag = "1")]
            pub log_id: String,
            #[prost(message, optional, tag = "2")]
            pub instance_filter: Option<InstanceFilter>,
            #[prost(message, optional, tag = "3")]
            pub from: Option<prost_types::Timestamp>,
            #[prost(message, optional, tag = "4")]
            pub till: Option<prost_types::Timestamp>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct SystemAlert {
            #[prost(string, tag = "1")]
            pub message: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct CoreAlert {
            #[prost(string, tag = "1")]
            pub core_component: String,
            #[prost(string, tag = "2")]
            pub message: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct SystemQuotaAlert {
            #[prost(string, tag = "1")]
            pub parameter: String,
            #[prost(uint64, tag = "2")]
            pub value: u64,
            #[prost(string, tag = "3")]
            pub status: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct InstanceQuotaAlert {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
            #[prost(string, tag = "2")]
            pub parameter: String,
            #[prost(uint64, tag = "3")]
            pub value: u64,
            #[prost(string, tag = "4")]
            pub status: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct DeviceAllocateAlert {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
            #[prost(string, tag = "2")]
            pub device: String,
            #[prost(string, tag = "3")]
            pub message: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct ResourceValidateAlert {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(message, repeated, tag = "2")]
            pub errors: Vec<ErrorInfo>,
        }

        /// Discriminated alert message. At most one payload field is
        /// populated; header-only alerts carry no payload at all.
        #[derive(Clone, PartialEq, Message)]
        pub struct Alert {
            #[prost(string, tag = "1")]
            pub tag: String,
            #[prost(message, optional, tag = "2")]
            pub timestamp: Option<prost_types::Timestamp>,
            #[prost(oneof = "alert::Payload", tags = "3, 4, 5, 6, 7, 8")]
            pub payload: Option<alert::Payload>,
        }

        pub mod alert {
            use prost::Oneof;

            #[derive(Clone, PartialEq, Oneof)]
            pub enum Payload {
                #[prost(message, tag = "3")]
                SystemAlert(super::SystemAlert),
                #[prost(message, tag = "4")]
                CoreAlert(super::CoreAlert),
                #[prost(message, tag = "5")]
                SystemQuotaAlert(super::SystemQuotaAlert),
                #[prost(message, tag = "6")]
                InstanceQuotaAlert(super::InstanceQuotaAlert),
                #[prost(message, tag = "7")]
                DeviceAllocateAlert(super::DeviceAllocateAlert),
                #[prost(message, tag = "8")]
                ResourceValidateAlert(super::ResourceValidateAlert),
            }
        }
    }
}

pub mod iam {
    pub mod v1 {
        use std::collections::HashMap;

        use prost::Message;

        pub use super::super::servicemanager::v1::InstanceIdent;

        #[derive(Clone, PartialEq, Message)]
        pub struct Permissions {
            #[prost(map = "string, string", tag = "1")]
            pub permissions: HashMap<String, String>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct RegisterInstanceRequest {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
            #[prost(map = "string, message", tag = "2")]
            pub permissions: HashMap<String, Permissions>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct RegisterInstanceResponse {
            #[prost(string, tag = "1")]
            pub secret: String,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct UnregisterInstanceRequest {
            #[prost(message, optional, tag = "1")]
            pub instance: Option<InstanceIdent>,
        }

        #[derive(Clone, PartialEq, Message)]
        pub struct Empty {}

        pub mod permissions_service_client {
            use super::*;
            use tonic::codegen::*;

            #[derive(Debug, Clone)]
            pub struct PermissionsServiceClient<T> {
                inner: tonic::client::Grpc<T>,
            }

            impl PermissionsServiceClient<tonic::transport::Channel> {
                pub fn new(channel: tonic::transport::Channel) -> Self {
                    let inner = tonic::client::Grpc::new(channel);
                    Self { inner }
                }
            }

            impl<T> PermissionsServiceClient<T>
            where
                T: tonic::client::GrpcService<tonic::body::BoxBody>,
                T::Error: Into<StdError>,
                T::ResponseBody: Body<Data = Bytes> + Send + 'static,
                <T::ResponseBody as Body>::Error: Into<StdError> + Send,
            {
                pub async fn register_instance(
                    &mut self,
                    request: impl tonic::IntoRequest<RegisterInstanceRequest>,
                ) -> Result<tonic::Response<RegisterInstanceResponse>, tonic::Status>
                {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/iam.v1.PermissionsService/RegisterInstance",
                    );
                    self.inner.unary(request.into_request(), path, codec).await
                }

                pub async fn unregister_instance(
                    &mut self,
                    request: impl tonic::IntoRequest<UnregisterInstanceRequest>,
                ) -> Result<tonic::Response<Empty>, tonic::Status> {
                    self.inner.ready().await.map_err(|e| {
                        tonic::Status::new(
                            tonic::Code::Unknown,
                            format!("Service was not ready: {}", e.into()),
                        )
                    })?;
                    let codec = tonic::codec::ProstCodec::default();
                    let path = http::uri::PathAndQuery::from_static(
                        "/iam.v1.PermissionsService/UnregisterInstance",
                    );
                    self.inner.unary(request.into_request(), path, codec).await
                }
            }
        }

        pub use permissions_service_client::PermissionsServiceClient;
    }
}
