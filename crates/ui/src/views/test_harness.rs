use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use replay_core::model::CanvasId;
use services::{
    AppServices, CanvasApi, CanvasConfig, CanvasCreated, CanvasError, CanvasRequest,
    CanvasService, SessionCatalogService,
};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, NoopLinkOpener};
use crate::views::{CanvasView, HomeView, SessionView, use_toast_provider};

struct StaticCanvasApi;

#[async_trait::async_trait]
impl CanvasApi for StaticCanvasApi {
    async fn create_canvas(&self, _request: &CanvasRequest) -> Result<CanvasCreated, CanvasError> {
        Ok(CanvasCreated {
            id: CanvasId::new("canvas-test"),
        })
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<SessionCatalogService> {
        self.services.catalog()
    }

    fn canvas(&self) -> Arc<CanvasService> {
        self.services.canvas()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopLinkOpener)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Session(String),
    Canvas(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_toast_provider();
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Session(id) => rsx! { SessionView { id } },
        ViewKind::Canvas(id) => rsx! { CanvasView { id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::embedded_fixture().expect("embedded fixture");
    setup_view_harness_with_storage(view, storage)
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let canvas = CanvasService::new(Arc::new(StaticCanvasApi), CanvasConfig::default());
    let app = Arc::new(TestApp {
        services: AppServices::new(&storage, canvas),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
