fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server for memo-server, client for memo-cli and the e2e tests
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["proto/memo/v1/memo.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/memo/v1/memo.proto");

    Ok(())
}
