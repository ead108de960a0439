// SPDX-License-Identifier: MPL-2.0
//! Drives the studio against the mock backend, executing every effect it
//! requests the way the application does.

mod common;

use common::{MockState, Outcome, PNG_BYTES};
use gixio::api::{ApiBase, Client, DEFAULT_REQUEST_TIMEOUT};
use gixio::studio::{BackendStatus, Effect, GenerationSettings, Phase, Studio, Tab};
use serde_json::json;
use std::collections::VecDeque;

fn setup(origin: &str) -> (Studio, Client) {
    let base = ApiBase::parse(origin).expect("mock origin is valid");
    let client = Client::new(base.clone(), DEFAULT_REQUEST_TIMEOUT).expect("client builds");
    let studio = Studio::new(base, GenerationSettings::default(), String::new());
    (studio, client)
}

/// Runs effects until the studio stops requesting new ones.
async fn run(studio: &mut Studio, client: &Client, effects: Vec<Effect>) {
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        let next = match effect {
            Effect::FetchGallery => {
                studio.gallery_loaded(client.gallery().await);
                Vec::new()
            }
            Effect::CheckHealth => {
                studio.health_checked(client.health().await);
                Vec::new()
            }
            Effect::Submit { attempt, request } => {
                let result = client.generate(&request).await;
                studio.generation_finished(attempt, result)
            }
            Effect::Delete(filename) => {
                let result = client.delete(&filename).await;
                studio.delete_finished(&filename, result)
            }
            Effect::Schedule { delay, timer } => {
                tokio::time::sleep(delay).await;
                studio.timer_elapsed(timer)
            }
        };
        queue.extend(next);
    }
}

#[tokio::test]
async fn sunset_generation_lands_in_the_gallery() {
    let backend = common::spawn(MockState::default()).await;
    let (mut studio, client) = setup(&backend.origin);

    let effects = studio.mount();
    run(&mut studio, &client, effects).await;
    assert!(studio.gallery().is_empty());
    assert_eq!(
        *studio.backend(),
        BackendStatus::Online {
            model_loaded: true,
            device: "cpu".into(),
        }
    );

    studio.set_prompt("sunset");
    let effects = studio.generate();
    assert!(studio.is_loading());
    run(&mut studio, &client, effects).await;

    let expected = format!("{}/images/a.png", backend.origin);
    assert_eq!(studio.displayed(), Some(expected.as_str()));
    assert!(!studio.is_loading());
    assert_eq!(*studio.phase(), Phase::Idle);
    assert_eq!(studio.progress().value(), 0.0);

    studio.select_tab(Tab::Gallery);
    assert_eq!(studio.gallery().len(), 1);
    let entry = studio.gallery()[0].clone();
    assert_eq!(entry.filename, "a.png");
    assert_eq!(entry.url, "/images/a.png");

    // Download fetches the same bytes the backend stored
    let bytes = client
        .fetch_image(&studio.base().resolve(&entry.url))
        .await
        .expect("image is served");
    assert_eq!(bytes, PNG_BYTES);

    studio.view_entry(&entry.filename);
    assert_eq!(studio.tab(), Tab::Create);
    assert_eq!(studio.displayed(), Some(expected.as_str()));

    let effects = studio.delete(&entry.filename);
    run(&mut studio, &client, effects).await;
    assert_eq!(studio.displayed(), None);
    assert!(studio.gallery().is_empty());
    assert_eq!(
        backend.with_state(|state| state.deleted.clone()),
        vec!["a.png".to_string()]
    );
}

#[tokio::test]
async fn failed_generation_keeps_the_previous_image() {
    let backend = common::spawn(MockState::default()).await;
    let (mut studio, client) = setup(&backend.origin);

    studio.set_prompt("sunset");
    let effects = studio.generate();
    run(&mut studio, &client, effects).await;
    let previous = studio.displayed().map(str::to_string);
    assert!(previous.is_some());

    backend.with_state(|state| {
        state.outcome = Outcome::Raw(503, json!({ "detail": "Model not loaded" }));
    });
    studio.set_prompt("sunrise");
    let effects = studio.generate();
    run(&mut studio, &client, effects).await;

    assert_eq!(studio.displayed().map(str::to_string), previous);
    assert!(!studio.is_loading());
    let alert = studio.alert().expect("failure raises an alert");
    assert_eq!(alert.key, "alert-generate-model-not-ready");
    assert_eq!(alert.detail.as_deref(), Some("Model not loaded"));
    assert_eq!(studio.gallery().len(), 1);
}
