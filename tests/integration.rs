// SPDX-License-Identifier: MPL-2.0
//! End-to-end panel scenarios over the real adapters: a filesystem
//! vault, the `kamadak-exif` decoder, and a recording panel host.

use metadata_lens::application::panel::{PanelController, PanelPhase};
use metadata_lens::application::port::{PanelHost, RemoteFetch};
use metadata_lens::domain::document::RenderedDocument;
use metadata_lens::error::NetworkError;
use metadata_lens::infrastructure::{ExifDecoder, FsVault};
use std::cell::RefCell;
use std::io::Write as _;
use std::path::Path;
use std::rc::Rc;

/// Serves a fixed body for every URL, standing in for a real server.
struct CannedNet {
    body: Result<Vec<u8>, NetworkError>,
}

impl RemoteFetch for CannedNet {
    async fn get(&self, _url: &str) -> Result<Vec<u8>, NetworkError> {
        self.body.clone()
    }
}

#[derive(Default)]
struct RecordingHost {
    revealed: Rc<RefCell<u32>>,
    content: Rc<RefCell<Option<RenderedDocument>>>,
}

impl PanelHost for RecordingHost {
    type Handle = ();

    fn create_or_reuse(&mut self) -> Self::Handle {}

    fn reveal(&mut self, _panel: &Self::Handle) {
        *self.revealed.borrow_mut() += 1;
    }

    fn set_content(&mut self, _panel: &Self::Handle, content: Option<&RenderedDocument>) {
        *self.content.borrow_mut() = content.cloned();
    }
}

/// Minimal little-endian TIFF with `Make = "Canon"` in IFD0.
fn tiff_fixture() -> Vec<u8> {
    vec![
        0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, // "II", 42, IFD0 at 8
        0x01, 0x00, // 1 entry
        // Make: tag 0x010F, ASCII, count 6, value at offset 26
        0x0F, 0x01, 0x02, 0x00, 0x06, 0x00, 0x00, 0x00, 0x1A, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, // no next IFD
        b'C', b'a', b'n', b'o', b'n', 0x00, // Make value
    ]
}

fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(bytes).expect("write fixture");
    path
}

fn offline() -> CannedNet {
    CannedNet {
        body: Err(NetworkError::Transport("offline".to_string())),
    }
}

#[tokio::test]
async fn clicking_an_image_in_the_active_document_fills_the_panel() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_fixture(dir.path(), "photo.tif", &tiff_fixture());

    let vault = FsVault::new();
    vault.set_active(Some(path));

    let host = RecordingHost::default();
    let revealed = Rc::clone(&host.revealed);
    let content = Rc::clone(&host.content);
    let controller = PanelController::new(vault, offline(), ExifDecoder::new(), host);

    controller.on_image_activated("photo.tif").await;

    let PanelPhase::OpenShowing(document) = controller.phase() else {
        panic!("expected OpenShowing, got {:?}", controller.phase());
    };
    assert_eq!(document.sections[0].title, "Image");
    assert!(document.sections[0]
        .rows
        .contains(&("Make".to_string(), "Canon".to_string())));
    assert_eq!(*revealed.borrow(), 1);
    assert_eq!(content.borrow().as_ref(), Some(&document));
}

#[tokio::test]
async fn remote_images_fetch_over_the_network_port() {
    let host = RecordingHost::default();
    let controller = PanelController::new(
        FsVault::new(),
        CannedNet {
            body: Ok(tiff_fixture()),
        },
        ExifDecoder::new(),
        host,
    );

    controller.show("https://example.com/photo.tif").await;

    let PanelPhase::OpenShowing(document) = controller.phase() else {
        panic!("expected OpenShowing, got {:?}", controller.phase());
    };
    assert_eq!(document.sections[0].title, "Image");
}

#[tokio::test]
async fn clicking_with_no_open_document_leaves_the_panel_empty() {
    let host = RecordingHost::default();
    let revealed = Rc::clone(&host.revealed);
    let controller = PanelController::new(FsVault::new(), offline(), ExifDecoder::new(), host);

    controller.on_image_activated("photo.tif").await;

    assert_eq!(controller.phase(), PanelPhase::OpenEmpty);
    assert_eq!(*revealed.borrow(), 0);
}

#[tokio::test]
async fn documents_without_metadata_clear_the_panel() {
    let dir = tempfile::tempdir().expect("temp dir");
    // A JPEG envelope with no APP1 segment.
    let path = write_fixture(dir.path(), "bare.jpg", &[0xFF, 0xD8, 0xFF, 0xD9]);

    let vault = FsVault::new();
    vault.set_active(Some(path));

    let host = RecordingHost::default();
    let content = Rc::clone(&host.content);
    let controller = PanelController::new(
        vault,
        CannedNet {
            body: Ok(tiff_fixture()),
        },
        ExifDecoder::new(),
        host,
    );

    // Show something first so the clear is observable.
    controller.show("https://example.com/x.tif").await;
    assert!(matches!(controller.phase(), PanelPhase::OpenShowing(_)));

    controller.on_context_changed().await;

    assert_eq!(controller.phase(), PanelPhase::OpenEmpty);
    assert!(content.borrow().is_none());
}

#[tokio::test]
async fn corrupt_documents_clear_the_panel() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_fixture(dir.path(), "corrupt.bin", b"not an image container");

    let vault = FsVault::new();
    vault.set_active(Some(path));

    let host = RecordingHost::default();
    let controller = PanelController::new(vault, offline(), ExifDecoder::new(), host);

    controller.on_context_changed().await;
    assert_eq!(controller.phase(), PanelPhase::OpenEmpty);
}
