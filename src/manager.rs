use crate::dom::Document;
use crate::options::SnackOptions;
use crate::rendering::{Geometry, Layout};
use crate::snackbar::Snackbar;
use crate::state::Registry;
use futures_util::future::join_all;
use snackbars_config::SnackbarsConfig;
use snackbars_util::Position;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use tracing::debug;

/// State shared by every snackbar of one document
pub(crate) struct Context {
    pub(crate) document: Document,
    pub(crate) config: SnackbarsConfig,
    pub(crate) geometry: Geometry,
    pub(crate) registry: RefCell<Registry<Snackbar>>,
    next_id: Cell<u64>,
}

impl Context {
    pub(crate) fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

/// Entry point: owns the document, the configuration and the registry of
/// live snackbars.
///
/// Cloning is cheap and every clone refers to the same registry. Snackbars
/// with a timeout, and dismissals waiting on an exit animation, spawn local
/// tasks, so they must be used from within a [`tokio::task::LocalSet`].
#[derive(Clone)]
pub struct Snackbars {
    ctx: Rc<Context>,
}

impl Default for Snackbars {
    fn default() -> Self {
        Self::new()
    }
}

impl Snackbars {
    pub fn new() -> Self {
        Self::with_config(SnackbarsConfig::default())
    }

    pub fn with_config(config: SnackbarsConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    pub fn with_document(document: Document, config: SnackbarsConfig) -> Self {
        let geometry = Geometry::from_config(&config);
        Self {
            ctx: Rc::new(Context {
                document,
                config,
                geometry,
                registry: RefCell::new(Registry::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    pub fn document(&self) -> &Document {
        &self.ctx.document
    }

    pub fn config(&self) -> &SnackbarsConfig {
        &self.ctx.config
    }

    /// Show `message` and return a handle to the new snackbar
    pub fn create_snackbar(&self, message: &str, options: SnackOptions) -> Snackbar {
        Snackbar::new(self.ctx.clone(), message, options)
    }

    /// Destroy every snackbar registered right now.
    ///
    /// The snapshot is taken and every dismissal started before this
    /// returns; the future resolves once all of them have finished, and
    /// dropping it early leaves the dismissals running. Snackbars created
    /// afterwards are left alone.
    pub fn destroy_all_snackbars(&self) -> impl Future<Output = ()> + use<> {
        let instances = self.ctx.registry.borrow().snapshot_all();
        debug!("Destroying all {} snackbars", instances.len());
        let pending: Vec<_> = instances.iter().map(Snackbar::destroy).collect();
        async move {
            join_all(pending).await;
        }
    }

    /// Live snackbars at `position`, oldest first
    pub fn instances(&self, position: Position) -> Vec<Snackbar> {
        self.ctx.registry.borrow().snapshot(position)
    }

    /// Number of live snackbars across all positions
    pub fn len(&self) -> usize {
        self.ctx.registry.borrow().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `position` is showing the stacked layout (as opposed to expanded)
    pub fn is_stacked(&self, position: Position) -> bool {
        self.ctx.registry.borrow().is_stacked(position)
    }

    pub fn layout(&self, position: Position) -> Layout {
        if self.is_stacked(position) {
            Layout::Stacked
        } else {
            Layout::Expanded
        }
    }
}
