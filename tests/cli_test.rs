// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod common;

use clap::Parser;
use common::{MockIaas, MockMongoDbFlex, INSTANCE_ID, PROJECT_ID};
use flexctl::cli::commands::Commands;
use flexctl::cli::iaas::{DeleteResourceCommand, IaasSubcommand};
use flexctl::cli::mongodbflex::{
    DeleteCommand, InstanceSubcommand, MongodbflexSubcommand, OptionsCommand, UpdateCommand,
};
use flexctl::cli::{CliArgs, CommandContext, GlobalFlags};
use flexctl::domain::config::{CliConf, OutputFormat, WaitConf};
use flexctl::domain::iaas::{IaasResource, ResourceKind};
use flexctl::CliError;
use std::sync::atomic::Ordering;
use tokio_util::sync::CancellationToken;

fn context(async_mode: bool) -> CommandContext {
    let flags = GlobalFlags {
        project_id: Some(PROJECT_ID.to_string()),
        assume_yes: true,
        async_mode,
        ..Default::default()
    };
    let conf = CliConf {
        wait: WaitConf {
            poll_interval_secs: 0,
            mongodbflex_timeout_secs: 5,
            iaas_timeout_secs: 5,
        },
        ..Default::default()
    };
    CommandContext::new(&flags, conf, CancellationToken::new())
}

fn update_command() -> UpdateCommand {
    UpdateCommand {
        instance_id: INSTANCE_ID.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_parse_update_command() {
    let args = CliArgs::try_parse_from([
        "flexctl",
        "mongodbflex",
        "instance",
        "update",
        INSTANCE_ID,
        "--cpu",
        "2",
        "--ram",
        "4",
        "--acl",
        "10.0.0.0/8,192.168.0.0/16",
        "--acl",
        "172.16.0.0/12",
        "--type",
        "Replica",
        "--project-id",
        PROJECT_ID,
        "-y",
        "--output-format",
        "json",
    ])
    .unwrap();

    assert!(args.global.assume_yes);
    assert_eq!(args.global.output_format, Some(OutputFormat::Json));
    match args.command {
        Commands::Mongodbflex(cmd) => match cmd.command {
            MongodbflexSubcommand::Instance(InstanceSubcommand::Update(update)) => {
                assert_eq!(update.cpu, Some(2));
                assert_eq!(update.instance_type.as_deref(), Some("Replica"));
                assert_eq!(
                    update.acl.unwrap(),
                    vec!["10.0.0.0/8", "192.168.0.0/16", "172.16.0.0/12"]
                );
            }
            other => panic!("unexpected subcommand: {:?}", other),
        },
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_iaas_delete_kind() {
    let args =
        CliArgs::try_parse_from(["flexctl", "iaas", "delete", "security-group", "sg-1", "--async"])
            .unwrap();
    assert!(args.global.async_mode);
    match args.command {
        Commands::Iaas(cmd) => match cmd.command {
            IaasSubcommand::Delete(delete) => {
                assert_eq!(delete.kind, ResourceKind::SecurityGroup);
                assert_eq!(delete.id, "sg-1");
            }
        },
        other => panic!("unexpected command: {:?}", other),
    }

    assert!(CliArgs::try_parse_from(["flexctl", "iaas", "delete", "router", "r-1"]).is_err());
}

#[test]
fn test_options_storages_requires_flavor() {
    assert!(
        CliArgs::try_parse_from(["flexctl", "mongodbflex", "options", "--storages"]).is_err()
    );
    assert!(CliArgs::try_parse_from([
        "flexctl",
        "mongodbflex",
        "options",
        "--storages",
        "--flavor-id",
        "flavor-1"
    ])
    .is_ok());
}

#[test]
fn test_update_input_validation() {
    let ctx = context(true);

    assert!(matches!(
        update_command().parse_input(&ctx),
        Err(CliError::EmptyUpdate)
    ));

    let conflicting = UpdateCommand {
        flavor_id: Some("flavor-1".to_string()),
        ram: Some(4),
        ..update_command()
    };
    assert!(matches!(
        conflicting.parse_input(&ctx),
        Err(CliError::AmbiguousFlavorTarget)
    ));

    let bad_id = UpdateCommand {
        instance_id: "orders-db".to_string(),
        name: Some("x".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        bad_id.parse_input(&ctx),
        Err(CliError::InvalidInput(_))
    ));

    let input = UpdateCommand {
        storage_size: Some(20),
        ..update_command()
    }
    .parse_input(&ctx)
    .unwrap();
    assert_eq!(input.project_id, PROJECT_ID);
    assert_eq!(input.intent.storage_size, Some(20));
}

#[tokio::test]
async fn test_update_async_sends_patch_without_waiting() {
    let ctx = context(true);
    let client = MockMongoDbFlex::with_catalog();
    let cmd = UpdateCommand {
        cpu: Some(4),
        ram: Some(16),
        ..update_command()
    };

    cmd.run(&ctx, &client).await.unwrap();

    assert_eq!(
        client.calls(),
        vec!["get_instance", "list_flavors", "partial_update_instance"]
    );
    let updates = client.updates.lock().unwrap();
    assert_eq!(updates[0].flavor_id.as_deref(), Some("flavor-2"));
}

#[tokio::test]
async fn test_update_waits_for_ready() {
    let ctx = context(false);
    let client = MockMongoDbFlex::with_catalog();
    let cmd = UpdateCommand {
        backup_schedule: Some("0 3 * * *".to_string()),
        ..update_command()
    };

    cmd.run(&ctx, &client).await.unwrap();

    assert_eq!(client.call_count("partial_update_instance"), 1);
    // label lookup, then one poll that sees READY
    assert_eq!(client.call_count("get_instance"), 2);
}

#[tokio::test]
async fn test_update_invalid_storage_sends_nothing() {
    let ctx = context(true);
    let client = MockMongoDbFlex::with_catalog();
    let cmd = UpdateCommand {
        storage_class: Some("archive".to_string()),
        ..update_command()
    };

    let err = cmd.run(&ctx, &client).await.unwrap_err();
    assert!(format!("{:#}", err).contains("storage class 'archive'"));
    assert_eq!(client.call_count("partial_update_instance"), 0);
}

#[tokio::test]
async fn test_delete_instance_waits_until_gone() {
    let ctx = context(false);
    let client = MockMongoDbFlex::with_catalog();
    let cmd = DeleteCommand {
        instance_id: INSTANCE_ID.to_string(),
    };

    cmd.run(&ctx, &client).await.unwrap();

    assert!(client.deleted.load(Ordering::SeqCst));
    assert_eq!(
        client.calls(),
        vec!["get_instance", "delete_instance", "get_instance"]
    );
}

#[tokio::test]
async fn test_options_fetches_selected_categories() {
    let ctx = context(true);
    let client = MockMongoDbFlex::with_catalog();
    let cmd = OptionsCommand {
        versions: true,
        instance_types: true,
        ..Default::default()
    };

    let options = cmd.fetch(&ctx, &client).await.unwrap();
    assert_eq!(client.calls(), vec!["list_versions"]);
    assert_eq!(options.latest_version.as_deref(), Some("7.0"));
    assert_eq!(
        options.instance_types.unwrap(),
        vec!["Replica", "Sharded", "Single"]
    );
    assert!(options.flavors.is_none());

    let none = OptionsCommand::default();
    assert!(matches!(
        none.fetch(&ctx, &client).await,
        Err(CliError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_options_storages_without_flavor_lists_nothing() {
    let ctx = context(true);
    let client = MockMongoDbFlex::with_catalog();
    let cmd = OptionsCommand {
        storages: true,
        ..Default::default()
    };

    let options = cmd.fetch(&ctx, &client).await.unwrap();
    assert!(options.storages.is_none());
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_iaas_delete_resource() {
    let ctx = context(false);
    let volume_id = "7d1c5e2a-9b3f-4c8d-a1e2-f3b4c5d6e7f8";
    let client = MockIaas::with_resource(
        volume_id,
        IaasResource {
            id: Some(volume_id.to_string()),
            name: Some("data-volume".to_string()),
            status: Some("AVAILABLE".to_string()),
            ip: None,
        },
    );
    let cmd = DeleteResourceCommand {
        kind: ResourceKind::Volume,
        id: volume_id.to_string(),
    };

    cmd.run(&ctx, &client).await.unwrap();

    assert_eq!(
        client.calls(),
        vec!["get:volumes", "delete:volumes", "get:volumes"]
    );
    assert!(client.resources.lock().unwrap().is_empty());
}
