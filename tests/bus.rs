//! Tests against a live session bus.
//!
//! Run with `cargo test --test bus -- --ignored` inside a desktop session or
//! under `dbus-run-session`.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{process, time::Duration};

use futures::StreamExt;
use serde_json::json;
use smart_media::{
    config::BusConfig,
    services::media::{MediaError, MediaManager, client, register},
};
use tokio::time::timeout;
use zbus::Connection;

const PATH: &str = "/io/smart/OMedia";

fn unique_name(tag: &str) -> String {
    format!("io.smart.SMedia.Test{tag}P{}", process::id())
}

fn bus_config(name: &str) -> BusConfig {
    BusConfig {
        service_name: name.to_string(),
        ..BusConfig::default()
    }
}

#[tokio::test]
#[ignore = "requires a D-Bus session bus"]
async fn remote_calls_reach_the_manager() {
    let name = unique_name("Calls");
    let connection = Connection::session().await.unwrap();
    let registration = register(&connection, PATH, &name, MediaManager::default())
        .await
        .unwrap();

    let proxy = client(&bus_config(&name)).await.unwrap();

    assert!(proxy.append_movie(r#"{"title":"A"}"#).await.unwrap());
    assert!(proxy.append_movie("not json").await.unwrap());
    assert_eq!(proxy.numbers_of_movies().await.unwrap(), 2);

    let items: serde_json::Value = serde_json::from_str(&proxy.items().await.unwrap()).unwrap();
    assert_eq!(items, json!([{"title": "A"}, {}]));

    proxy.set_items(r#"[{"title":"X"}]"#).await.unwrap();
    assert_eq!(proxy.numbers_of_movies().await.unwrap(), 1);

    assert!(proxy.set_items("not an array").await.is_err());

    assert!(proxy.current_playing_song("Song X").await.unwrap());
    assert!(!proxy.song_has_stopped().await.unwrap());

    registration.release().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a D-Bus session bus"]
async fn signals_reach_session_subscribers() {
    let name = unique_name("Signals");
    let connection = Connection::session().await.unwrap();
    let registration = register(&connection, PATH, &name, MediaManager::default())
        .await
        .unwrap();

    let proxy = client(&bus_config(&name)).await.unwrap();
    let mut pre = proxy.receive_pre_item_appended().await.unwrap();
    let mut post = proxy.receive_post_item_appended().await.unwrap();
    let mut notify = proxy.receive_notify().await.unwrap();

    proxy.append_movie("{}").await.unwrap();
    timeout(Duration::from_secs(5), pre.next()).await.unwrap().unwrap();
    timeout(Duration::from_secs(5), post.next()).await.unwrap().unwrap();

    proxy.current_playing_song("Song X").await.unwrap();
    let signal = timeout(Duration::from_secs(5), notify.next())
        .await
        .unwrap()
        .unwrap();
    let args = signal.args().unwrap();
    assert_eq!(*args.code(), 1);
    assert_eq!(args.text(), "Song X");

    proxy.song_has_stopped().await.unwrap();
    let signal = timeout(Duration::from_secs(5), notify.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(signal.args().unwrap().text(), "");

    registration.release().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a D-Bus session bus"]
async fn name_collision_is_reported() {
    let name = unique_name("Collision");

    let first = Connection::session().await.unwrap();
    let registration = register(&first, PATH, &name, MediaManager::default())
        .await
        .unwrap();

    let second = Connection::session().await.unwrap();
    let err = register(&second, PATH, &name, MediaManager::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, MediaError::NameRegistrationFailed { .. }));

    // The failed attempt must not leave the object exported.
    let retry = register(&second, PATH, &unique_name("Retry"), MediaManager::default())
        .await
        .unwrap();

    retry.release().await.unwrap();
    registration.release().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a D-Bus session bus"]
async fn same_path_twice_on_one_connection_is_rejected() {
    let connection = Connection::session().await.unwrap();
    let registration = register(&connection, PATH, &unique_name("PathA"), MediaManager::default())
        .await
        .unwrap();

    let err = register(&connection, PATH, &unique_name("PathB"), MediaManager::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, MediaError::ObjectPathInUse(_)));

    registration.release().await.unwrap();
}
