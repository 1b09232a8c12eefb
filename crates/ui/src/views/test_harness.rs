use std::io::Write as _;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{CatalogService, ProgressService};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::EssayListView;

struct TestApp {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { EssayListView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    // Keeps the temp catalog alive for the harness lifetime.
    _catalog_file: tempfile::NamedTempFile,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        // The catalog resource does real file I/O, so give the future a few
        // poll rounds before rendering the settled state.
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
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

/// Harness over in-memory storage and a temp catalog file containing
/// `catalog_json` verbatim.
pub fn setup_view_harness(catalog_json: &str) -> ViewHarness {
    setup_view_harness_with_storage(catalog_json, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(catalog_json: &str, storage: Storage) -> ViewHarness {
    let mut catalog_file = tempfile::NamedTempFile::new().expect("temp catalog");
    catalog_file
        .write_all(catalog_json.as_bytes())
        .expect("write catalog");

    let catalog = Arc::new(CatalogService::new(catalog_file.path()));
    let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress)));
    let app = Arc::new(TestApp { catalog, progress });

    let dom = VirtualDom::new_with_props(HarnessRoot, HarnessProps { app });

    ViewHarness {
        dom,
        storage,
        _catalog_file: catalog_file,
    }
}
