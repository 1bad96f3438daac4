//! Deferred view loading
//!
//! A [`ViewLoader`] wraps an asynchronous factory. The view is produced on
//! the first call to [`ViewLoader::load`] and cached for every later call.
//! Failed loads are not cached, so the next call retries.

use crate::error::{Error, Result};
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

type ViewFactory<V> = Box<dyn Fn() -> BoxFuture<'static, Result<V>> + Send + Sync>;

pub struct ViewLoader<V> {
    factory: ViewFactory<V>,
    cell: OnceCell<Arc<V>>,
}

impl<V> ViewLoader<V>
where
    V: Send + Sync + 'static,
{
    /// Create a loader from an async factory
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        Self {
            factory: Box::new(move || factory().boxed()),
            cell: OnceCell::new(),
        }
    }

    /// Create a loader whose view is already built
    pub fn ready(view: V) -> Self {
        let view = Arc::new(view);
        Self {
            factory: Box::new(|| {
                async { Err::<V, Error>(Error::Generic("view has no factory".to_string())) }
                    .boxed()
            }),
            cell: OnceCell::new_with(Some(view)),
        }
    }

    /// Resolve the view, running the factory at most once on success
    pub async fn load(&self) -> Result<Arc<V>> {
        self.cell
            .get_or_try_init(|| async { (self.factory)().await.map(Arc::new) })
            .await
            .cloned()
    }

    /// The cached view, if it has been loaded
    pub fn get(&self) -> Option<Arc<V>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

impl<V> fmt::Debug for ViewLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLoader")
            .field("loaded", &self.cell.initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_factory_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let loader = ViewLoader::new(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(String::from("projects"))
            }
        });

        assert!(!loader.is_loaded());
        assert!(loader.get().is_none());

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        assert_eq!(first.as_str(), "projects");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(loader.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let loader = ViewLoader::new(move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(Error::View(ViewError::LoadFailed {
                        route: "resume".into(),
                        message: "not yet".into(),
                    }))
                } else {
                    Ok(42u32)
                }
            }
        });

        assert!(loader.load().await.is_err());
        assert!(!loader.is_loaded());
        assert_eq!(*loader.load().await.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_ready_loader_is_preloaded() {
        let loader = ViewLoader::ready("contact");
        assert!(loader.is_loaded());
        assert_eq!(*loader.load().await.unwrap(), "contact");
    }
}
