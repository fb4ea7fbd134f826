// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows of the gallery screen against a recording fake service.
//!
//! Every remote request the screen emits is executed with the real effect
//! runner and its completion is fed back, until the screen settles.

use async_trait::async_trait;
use gallery_admin::application::port::PhotoService;
use gallery_admin::domain::gallery::{Photo, PhotoDraft, PhotoId, PhotoPage, PAGE_SIZE};
use gallery_admin::error::{Error, Result};
use gallery_admin::ui::gallery::{effects, Effect, Message, State};
use gallery_admin::ui::notifications::{Notification, Severity};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List { page: u32, limit: u32 },
    Create(PhotoDraft),
    Update(PhotoId, PhotoDraft),
    Delete(PhotoId),
}

#[derive(Default)]
struct FakeService {
    calls: Mutex<Vec<Call>>,
    pages: Mutex<HashMap<u32, PhotoPage>>,
    fail_list: AtomicBool,
    save_error: Mutex<Option<Error>>,
}

impl FakeService {
    fn with_pages(pages: Vec<Vec<Photo>>) -> Arc<Self> {
        let total = pages.len() as u32;
        let service = Self::default();
        {
            let mut map = service.pages.lock().unwrap();
            for (i, photos) in pages.into_iter().enumerate() {
                map.insert(
                    i as u32 + 1,
                    PhotoPage {
                        photos,
                        total_pages: Some(total),
                    },
                );
            }
        }
        Arc::new(service)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl PhotoService for FakeService {
    async fn list(&self, page: u32, limit: u32) -> Result<PhotoPage> {
        self.record(Call::List { page, limit });
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::Transport("connection refused".into()));
        }
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or(PhotoPage {
                photos: Vec::new(),
                total_pages: None,
            }))
    }

    async fn create(&self, draft: &PhotoDraft) -> Result<Photo> {
        self.record(Call::Create(draft.clone()));
        if let Some(err) = self.save_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(photo_from(PhotoId::new("new"), draft))
    }

    async fn update(&self, id: &PhotoId, draft: &PhotoDraft) -> Result<Photo> {
        self.record(Call::Update(id.clone(), draft.clone()));
        if let Some(err) = self.save_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(photo_from(id.clone(), draft))
    }

    async fn delete(&self, id: &PhotoId) -> Result<()> {
        self.record(Call::Delete(id.clone()));
        Ok(())
    }

    async fn fetch_image(&self, _url: &str) -> Result<Vec<u8>> {
        Err(Error::Transport("no images in tests".into()))
    }
}

fn photo_from(id: PhotoId, draft: &PhotoDraft) -> Photo {
    Photo {
        id,
        image: draft.image.clone(),
        title: draft.title.clone(),
        category: draft.category.clone(),
        order: draft.order,
    }
}

fn photo(id: &str, title: &str) -> Photo {
    Photo {
        id: PhotoId::new(id),
        image: format!("/{id}.jpg"),
        title: title.into(),
        category: "general".into(),
        order: 0,
    }
}

/// Applies `message` and every completion it leads to; returns the toasts.
async fn settle(state: &mut State, service: &Arc<FakeService>, message: Message) -> Vec<Notification> {
    let runner: Arc<dyn PhotoService> = service.clone();
    let mut queue = VecDeque::from([message]);
    let mut toasts = Vec::new();
    while let Some(message) = queue.pop_front() {
        for effect in state.update(message) {
            match effect {
                Effect::Notify(notification) => toasts.push(notification),
                Effect::Remote(request) => {
                    queue.push_back(effects::perform(Arc::clone(&runner), request).await);
                }
            }
        }
    }
    toasts
}

async fn mounted(service: &Arc<FakeService>) -> State {
    let mut state = State::new();
    settle(&mut state, service, Message::Mounted).await;
    service.clear_calls();
    state
}

fn lists(calls: &[Call]) -> usize {
    calls.iter().filter(|c| matches!(c, Call::List { .. })).count()
}

#[tokio::test]
async fn mount_loads_first_page_with_page_size() {
    let service = FakeService::with_pages(vec![vec![photo("a", "A")]]);
    let mut state = State::new();
    settle(&mut state, &service, Message::Mounted).await;

    assert_eq!(
        service.calls(),
        vec![Call::List {
            page: 1,
            limit: PAGE_SIZE
        }]
    );
    assert_eq!(state.photos().len(), 1);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn search_matches_lowercased_titles_of_current_page() {
    let titles = ["Summer Party", "winter walk", "PARTY night", "Beach", "Part"];
    let page: Vec<Photo> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| photo(&i.to_string(), t))
        .collect();
    let service = FakeService::with_pages(vec![page.clone(), vec![photo("other", "Party elsewhere")]]);
    let mut state = mounted(&service).await;

    for term in ["party", "PARTY", "Part", "", "walk", "zzz", " "] {
        settle(&mut state, &service, Message::SearchChanged(term.into())).await;
        let expected: Vec<&str> = page
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&term.to_lowercase()))
            .map(|p| p.id.as_str())
            .collect();
        let visible: Vec<&str> = state.visible_photos().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, expected, "term {term:?}");
    }
    assert!(service.calls().is_empty(), "search never hits the service");
}

#[tokio::test]
async fn cancelling_an_edit_changes_nothing_remotely_and_resets_draft() {
    let service = FakeService::with_pages(vec![vec![photo("p", "Event")]]);
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::OpenEdit(PhotoId::new("p"))).await;
    settle(&mut state, &service, Message::TitleChanged("Changed".into())).await;
    settle(&mut state, &service, Message::CloseModal).await;

    assert!(service.calls().is_empty());
    assert!(state.modal().is_none());

    settle(&mut state, &service, Message::OpenCreate).await;
    let form = &state.modal().expect("create modal").form;
    assert_eq!(
        (form.image.as_str(), form.title.as_str(), form.category.as_str(), form.order.as_str()),
        ("", "", "general", "0")
    );
}

#[tokio::test]
async fn create_sends_one_request_then_refetches_once() {
    let service = FakeService::with_pages(vec![vec![photo("a", "A")]]);
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::OpenCreate).await;
    for message in [
        Message::ImageChanged("/a.jpg".into()),
        Message::TitleChanged("Event".into()),
        Message::CategoryChanged("events".into()),
        Message::OrderChanged("2".into()),
    ] {
        settle(&mut state, &service, message).await;
    }
    let toasts = settle(&mut state, &service, Message::Submit).await;

    assert_eq!(
        service.calls(),
        vec![
            Call::Create(PhotoDraft {
                image: "/a.jpg".into(),
                title: "Event".into(),
                category: "events".into(),
                order: 2,
            }),
            Call::List {
                page: 1,
                limit: PAGE_SIZE
            },
        ]
    );
    assert!(state.modal().is_none());
    assert!(toasts
        .iter()
        .any(|t| t.severity() == Severity::Success && t.message_key() == "notification-create-success"));
}

#[tokio::test]
async fn update_is_keyed_by_the_edited_photo() {
    let service = FakeService::with_pages(vec![vec![photo("X", "Old title")]]);
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::OpenEdit(PhotoId::new("X"))).await;
    settle(&mut state, &service, Message::TitleChanged("New title".into())).await;
    settle(&mut state, &service, Message::Submit).await;

    let calls = service.calls();
    let updates: Vec<&Call> = calls.iter().filter(|c| matches!(c, Call::Update(..))).collect();
    assert_eq!(updates.len(), 1);
    assert!(matches!(updates[0], Call::Update(id, draft) if id.as_str() == "X" && draft.title == "New title"));
    assert!(!calls.iter().any(|c| matches!(c, Call::Create(_))));
    assert_eq!(lists(&calls), 1);
}

#[tokio::test]
async fn failed_save_shows_server_message_and_keeps_draft() {
    let service = FakeService::with_pages(vec![vec![]]);
    *service.save_error.lock().unwrap() = Some(Error::Api {
        status: 400,
        message: Some("Image URL is not reachable".into()),
    });
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::OpenCreate).await;
    settle(&mut state, &service, Message::ImageChanged("/broken.jpg".into())).await;
    settle(&mut state, &service, Message::TitleChanged("Broken".into())).await;
    let toasts = settle(&mut state, &service, Message::Submit).await;

    assert_eq!(lists(&service.calls()), 0, "no refetch after a failed save");
    let modal = state.modal().expect("modal stays open");
    assert_eq!(modal.form.image, "/broken.jpg");
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity(), Severity::Error);
    assert_eq!(
        toasts[0].message_args(),
        &[("message".to_string(), "Image URL is not reachable".to_string())]
    );
}

#[tokio::test]
async fn pagination_never_leaves_known_range() {
    let service = FakeService::with_pages(vec![vec![photo("a", "A")], vec![photo("b", "B")]]);
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::PreviousPage).await;
    assert_eq!(state.page().value(), 1);
    assert!(service.calls().is_empty());

    settle(&mut state, &service, Message::NextPage).await;
    assert_eq!(state.page().value(), 2);
    assert_eq!(
        service.calls(),
        vec![Call::List {
            page: 2,
            limit: PAGE_SIZE
        }]
    );
    assert_eq!(state.photos()[0].id.as_str(), "b");

    service.clear_calls();
    settle(&mut state, &service, Message::NextPage).await;
    assert_eq!(state.page().value(), 2);
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn confirmed_delete_sends_exactly_one_request() {
    let service = FakeService::with_pages(vec![vec![photo("Y", "Doomed"), photo("Z", "Kept")]]);
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::RequestDelete(PhotoId::new("Y"))).await;
    assert!(service.calls().is_empty(), "nothing happens before confirmation");
    let toasts = settle(&mut state, &service, Message::ConfirmDelete).await;

    let calls = service.calls();
    assert_eq!(
        calls.iter().filter(|c| matches!(c, Call::Delete(_))).collect::<Vec<_>>(),
        vec![&Call::Delete(PhotoId::new("Y"))]
    );
    assert_eq!(lists(&calls), 1);
    assert!(toasts
        .iter()
        .any(|t| t.message_key() == "notification-delete-success"));
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let service = FakeService::with_pages(vec![vec![photo("Y", "Kept")]]);
    let mut state = mounted(&service).await;

    settle(&mut state, &service, Message::RequestDelete(PhotoId::new("Y"))).await;
    settle(&mut state, &service, Message::CancelDelete).await;
    settle(&mut state, &service, Message::ConfirmDelete).await;

    assert!(service.calls().is_empty());
    assert_eq!(state.photos().len(), 1);
}

#[tokio::test]
async fn failed_fetch_keeps_previous_photos() {
    let service = FakeService::with_pages(vec![vec![photo("a", "A"), photo("b", "B")]]);
    let mut state = mounted(&service).await;

    service.fail_list.store(true, Ordering::SeqCst);
    let toasts = settle(&mut state, &service, Message::Refresh).await;

    assert_eq!(state.photos().len(), 2);
    assert!(!state.is_loading());
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message_key(), "notification-load-error");
}
