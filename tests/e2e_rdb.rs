//! rdb registry E2E tests against a mock HTTP server

mod helper;

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::{Value, json};

use helper::create_rdb_body;
use alt_branch_diff::fetch::compare_branches;
use alt_branch_diff::version::error::RegistryError;
use alt_branch_diff::version::registries::RdbRegistry;
use alt_branch_diff::version::types::{Arch, Branch};

#[tokio::test]
async fn report_carries_upstream_records_verbatim() {
    let mut server = Server::new_async().await;

    let main_bar = json!({
        "name": "bar",
        "epoch": 0,
        "version": "2.0",
        "release": "alt1",
        "arch": "x86_64",
        "disttag": "sisyphus+330000.100.1.1",
        "buildtime": 1700000000,
        "source": "bar"
    });
    let main_foo = json!({
        "name": "foo",
        "version": "1.0",
        "release": "alt1",
        "arch": "x86_64"
    });
    let aux_bar = json!({
        "name": "bar",
        "epoch": 0,
        "version": "1.0",
        "release": "alt1",
        "arch": "x86_64"
    });
    let aux_baz = json!({
        "name": "baz",
        "epoch": 0,
        "version": "1.0",
        "release": "alt1",
        "arch": "x86_64"
    });

    let main_mock = server
        .mock("GET", "/export/branch_binary_packages/sisyphus")
        .match_query(Matcher::UrlEncoded("arch".into(), "x86_64".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(create_rdb_body(
            "x86_64",
            vec![main_foo.clone(), main_bar.clone()],
        ))
        .create_async()
        .await;
    let aux_mock = server
        .mock("GET", "/export/branch_binary_packages/p10")
        .match_query(Matcher::UrlEncoded("arch".into(), "x86_64".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(create_rdb_body("x86_64", vec![aux_bar, aux_baz.clone()]))
        .create_async()
        .await;

    let registry = RdbRegistry::new(&server.url()).unwrap();
    let report = compare_branches(
        &registry,
        Branch::Sisyphus,
        Branch::P10,
        Arch::X86_64,
        Duration::from_secs(10),
    )
    .await
    .unwrap();

    main_mock.assert_async().await;
    aux_mock.assert_async().await;

    let value: Value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        json!({
            "arch": "x86_64",
            "total_uniq_sisyphus": 1,
            "total_uniq_p10": 1,
            "total_higher_version": 1,
            "uniq_sisyphus": [main_foo],
            "uniq_p10": [aux_baz],
            "higher_version": [main_bar]
        })
    );
}

#[tokio::test]
async fn server_error_on_aux_branch_fails_comparison() {
    let mut server = Server::new_async().await;

    let _main_mock = server
        .mock("GET", "/export/branch_binary_packages/p11")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(create_rdb_body("noarch", vec![]))
        .create_async()
        .await;
    let aux_mock = server
        .mock("GET", "/export/branch_binary_packages/p10")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let registry = RdbRegistry::new(&server.url()).unwrap();
    let result = compare_branches(
        &registry,
        Branch::P11,
        Branch::P10,
        Arch::Noarch,
        Duration::from_secs(10),
    )
    .await;

    aux_mock.assert_async().await;
    assert!(matches!(
        result,
        Err(RegistryError::Status {
            branch: Branch::P10,
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        })
    ));
}
