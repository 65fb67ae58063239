use std::{cell::Cell, future::Future};
use dioxus::logger::tracing::{error, info, warn};

use super::{
  notify::{Notification, CATALOG_LOAD_FAILED},
  server::{AppError, CatalogResponse, Category, PriceItem},
};

pub const CATALOG_URL: &str = env!("CATALOG_URL");

/// Where the landing page gets its catalog document from.
pub trait CatalogSource {
  fn fetch(&self) -> impl Future<Output = Result<CatalogResponse, AppError>>;
}

pub struct HttpCatalogSource {
  url: String,
}

impl HttpCatalogSource {
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }
}

impl CatalogSource for HttpCatalogSource {
  async fn fetch(&self) -> Result<CatalogResponse, AppError> {
    let response = reqwest::get(&self.url).await.map_err(|e| AppError::ReqwestError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      return Err(AppError::StatusError(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| AppError::ReqwestError(e.to_string()))?;
    CatalogResponse::from_json(&body)
  }
}

/// Issues the catalog request at most once and drops the answer if the page
/// went away while it was in flight.
pub struct CatalogLoader<S> {
  source: S,
  attempted: Cell<bool>,
  disposed: Cell<bool>,
}

impl<S: CatalogSource> CatalogLoader<S> {
  pub fn new(source: S) -> Self {
    Self { source, attempted: Cell::new(false), disposed: Cell::new(false) }
  }

  pub fn dispose(&self) {
    self.disposed.set(true);
  }

  pub fn is_disposed(&self) -> bool {
    self.disposed.get()
  }

  /// `None` means there is nothing to apply: either the fetch was already issued
  /// or the page was torn down before it resolved.
  pub async fn load(&self) -> Option<Result<CatalogResponse, AppError>> {
    if self.attempted.replace(true) {
      warn!("catalog fetch already issued for this page, skipping");
      return None;
    }

    info!("fetching catalog");
    let result = self.source.fetch().await;

    if self.is_disposed() {
      info!("page torn down before the catalog arrived, dropping the result");
      return None;
    }
    Some(result)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoadState {
  #[default]
  Loading,
  Loaded,
  Failed,
}

/// What a catalog-driven section should show.
#[derive(Debug, PartialEq)]
pub enum SectionContent<'a, T> {
  Loading,
  Empty,
  Rows(&'a [T]),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogView {
  pub state: LoadState,
  pub categories: Vec<Category>,
  pub price_list: Vec<PriceItem>,
}

impl CatalogView {
  /// Applies the outcome of the fetch. Every failure kind collapses into `Failed`
  /// with empty arrays and the single load-error toast.
  pub fn resolve(&mut self, result: Result<CatalogResponse, AppError>) -> Option<Notification> {
    match result {
      Ok(catalog) => {
        info!("catalog loaded: {} categories, {} price rows", catalog.categories.len(), catalog.price_list.len());
        self.categories = catalog.categories;
        self.price_list = catalog.price_list;
        self.state = LoadState::Loaded;
        None
      },
      Err(e) => {
        error!("Failed to load catalog: {}", e);
        self.categories.clear();
        self.price_list.clear();
        self.state = LoadState::Failed;
        Some(CATALOG_LOAD_FAILED)
      }
    }
  }

  pub fn category_section(&self) -> SectionContent<'_, Category> {
    section(self.state, &self.categories)
  }

  pub fn price_section(&self) -> SectionContent<'_, PriceItem> {
    section(self.state, &self.price_list)
  }
}

fn section<T>(state: LoadState, items: &[T]) -> SectionContent<'_, T> {
  match state {
    LoadState::Loading => SectionContent::Loading,
    _ if items.is_empty() => SectionContent::Empty,
    _ => SectionContent::Rows(items),
  }
}

#[cfg(test)]
mod tests {
  use std::{
    cell::RefCell,
    io::{Read, Write},
    net::TcpListener,
    pin::pin,
    thread,
  };
  use futures::{channel::oneshot, executor::block_on, poll};

  use super::*;

  struct FakeSource {
    calls: Cell<usize>,
    result: Result<CatalogResponse, AppError>,
  }

  impl FakeSource {
    fn new(result: Result<CatalogResponse, AppError>) -> Self {
      Self { calls: Cell::new(0), result }
    }
  }

  impl CatalogSource for FakeSource {
    async fn fetch(&self) -> Result<CatalogResponse, AppError> {
      self.calls.set(self.calls.get() + 1);
      self.result.clone()
    }
  }

  // stays pending until the test releases it
  struct GatedSource {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
  }

  impl CatalogSource for GatedSource {
    async fn fetch(&self) -> Result<CatalogResponse, AppError> {
      let gate = self.gate.borrow_mut().take().expect("fetched twice");
      let _ = gate.await;
      Ok(sample_catalog())
    }
  }

  fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_string(), icon: "Layers".to_string(), description: String::new() }
  }

  fn price_item(id: i64, price: &str) -> PriceItem {
    PriceItem { id, name: format!("Позиция {}", id), specs: String::new(), price: price.to_string(), unit: "т".to_string() }
  }

  fn sample_catalog() -> CatalogResponse {
    CatalogResponse {
      categories: vec![category(2, "Листовой прокат"), category(1, "Сортовой прокат"), category(5, "Трубы")],
      price_list: vec![price_item(10, "48900.00"), price_item(4, "1234.5")],
    }
  }

  #[test]
  fn test_initial_view_is_loading() {
    let view = CatalogView::default();
    assert_eq!(view.state, LoadState::Loading);
    assert_eq!(view.category_section(), SectionContent::Loading);
    assert_eq!(view.price_section(), SectionContent::Loading);
  }

  #[test]
  fn test_success_keeps_one_entry_per_element_in_order() {
    let mut view = CatalogView::default();
    assert_eq!(view.resolve(Ok(sample_catalog())), None);
    assert_eq!(view.state, LoadState::Loaded);

    match view.category_section() {
      SectionContent::Rows(rows) => {
        let ids: Vec<i64> = rows.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1, 5]);
      },
      other => panic!("expected category rows, got {:?}", other),
    }
    match view.price_section() {
      SectionContent::Rows(rows) => {
        let ids: Vec<i64> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 4]);
      },
      other => panic!("expected price rows, got {:?}", other),
    }
  }

  #[test]
  fn test_missing_arrays_show_empty_placeholders() {
    let mut view = CatalogView::default();
    let catalog = CatalogResponse::from_json(r#"{"categories": [{"id": 1, "name": "Трубы", "icon": "Cylinder", "description": ""}]}"#).unwrap();
    view.resolve(Ok(catalog));

    assert!(matches!(view.category_section(), SectionContent::Rows(rows) if rows.len() == 1));
    assert_eq!(view.price_section(), SectionContent::Empty);
  }

  #[test]
  fn test_failure_empties_arrays_and_notifies_once() {
    let mut view = CatalogView::default();
    let notification = view.resolve(Err(AppError::ReqwestError("connection refused".to_string())));

    assert_eq!(notification, Some(CATALOG_LOAD_FAILED));
    assert_eq!(view.state, LoadState::Failed);
    assert!(view.categories.is_empty());
    assert!(view.price_list.is_empty());
    assert_eq!(view.category_section(), SectionContent::Empty);
    assert_eq!(view.price_section(), SectionContent::Empty);
  }

  #[test]
  fn test_status_and_payload_errors_are_the_same_failure() {
    for err in [AppError::StatusError(502), AppError::DeserializeError("expected value".to_string())] {
      let mut view = CatalogView::default();
      assert_eq!(view.resolve(Err(err)), Some(CATALOG_LOAD_FAILED));
      assert_eq!(view.state, LoadState::Failed);
    }
  }

  #[test]
  fn test_loader_fetches_once() {
    let loader = CatalogLoader::new(FakeSource::new(Ok(sample_catalog())));

    let first = block_on(loader.load());
    let second = block_on(loader.load());

    assert_eq!(first, Some(Ok(sample_catalog())));
    assert_eq!(second, None);
    assert_eq!(loader.source.calls.get(), 1);
  }

  #[test]
  fn test_fresh_loader_fetches_again() {
    // a re-mounted page builds a new loader
    let source = FakeSource::new(Ok(CatalogResponse::default()));
    let loader = CatalogLoader::new(source);
    block_on(loader.load());

    let remounted = CatalogLoader::new(FakeSource::new(Ok(CatalogResponse::default())));
    assert!(block_on(remounted.load()).is_some());
    assert_eq!(remounted.source.calls.get(), 1);
  }

  #[test]
  fn test_loader_passes_errors_through() {
    let loader = CatalogLoader::new(FakeSource::new(Err(AppError::StatusError(500))));
    let mut view = CatalogView::default();

    let result = block_on(loader.load()).expect("first load should produce a result");
    let notifications: Vec<Notification> = view.resolve(result).into_iter().collect();

    assert_eq!(notifications, vec![CATALOG_LOAD_FAILED]);
  }

  #[test]
  fn test_result_dropped_after_dispose() {
    let (release, gate) = oneshot::channel();
    let loader = CatalogLoader::new(GatedSource { gate: RefCell::new(Some(gate)) });

    block_on(async {
      let mut pending = pin!(loader.load());
      assert!(poll!(pending.as_mut()).is_pending());

      loader.dispose();
      release.send(()).unwrap();

      assert_eq!(pending.await, None);
    });
    assert!(loader.is_disposed());
  }

  // answers a single request with the given raw HTTP response, then closes
  fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
      let (mut stream, _) = listener.accept().unwrap();
      let mut request = [0u8; 2048];
      let _ = stream.read(&mut request);
      stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{}/catalog", addr)
  }

  #[tokio::test]
  async fn test_http_source_parses_success_body() {
    let url = serve_once(
      "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 38\r\nConnection: close\r\n\r\n{\"categories\": [], \"priceList\": null}\n",
    );
    let catalog = HttpCatalogSource::new(url).fetch().await.unwrap();
    assert_eq!(catalog, CatalogResponse::default());
  }

  #[tokio::test]
  async fn test_http_source_rejects_non_success_status() {
    let url = serve_once(
      "HTTP/1.1 502 Bad Gateway\r\nContent-Type: application/json\r\nContent-Length: 36\r\nConnection: close\r\n\r\n{\"categories\": [], \"priceList\": []}\n",
    );
    let err = HttpCatalogSource::new(url).fetch().await.unwrap_err();
    assert_eq!(err, AppError::StatusError(502));
  }

  #[tokio::test]
  async fn test_http_source_connection_refused() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let err = HttpCatalogSource::new(format!("http://{}/catalog", addr)).fetch().await.unwrap_err();
    assert!(matches!(err, AppError::ReqwestError(_)));
  }
}
