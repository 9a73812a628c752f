//! Protobuf types and service stubs generated from `proto/memo/v1/memo.proto`

tonic::include_proto!("memo.v1");
