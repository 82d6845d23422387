// Maps files and notifications to window open requests

use serde::{Deserialize, Serialize};

use crate::state::error::StateResult;
use crate::state::registry::AppId;
use crate::state::window::{OpenWindowRequest, WindowAppProps, WindowInstance};
use crate::state::StateManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    Image,
    Text,
    Music,
    Code,
}

/// The bits of a file-system entry the launcher needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    #[serde(default)]
    pub content: Option<String>,
}

/// Which window a file opens in. Music has no player, so it opens nothing.
pub fn open_request_for_file(file: &FileEntry) -> Option<OpenWindowRequest> {
    let content = file.content.clone().unwrap_or_default();
    match file.kind {
        FileKind::Text | FileKind::Code => Some(
            OpenWindowRequest::new(AppId::TextEditor)
                .with_title(file.name.clone())
                .with_props(WindowAppProps::TextDocument { content }),
        ),
        FileKind::Image => Some(
            OpenWindowRequest::new(AppId::ImageViewer)
                .with_title(file.name.clone())
                .with_props(WindowAppProps::Image { image_url: content }),
        ),
        FileKind::Folder => Some(OpenWindowRequest::new(AppId::Finder)),
        FileKind::Music => None,
    }
}

pub fn open_file(
    store: &mut StateManager,
    file: &FileEntry,
) -> StateResult<Option<WindowInstance>> {
    match open_request_for_file(file) {
        Some(request) => store.open(request).map(Some),
        None => {
            log::debug!("No app opens {:?} files ({})", file.kind, file.name);
            Ok(None)
        }
    }
}

/// Clicking a letter notification opens it in Love Letters
pub fn open_request_for_letter(letter_id: &str) -> OpenWindowRequest {
    OpenWindowRequest::new(AppId::LoveLetters).with_props(WindowAppProps::Letter {
        letter_id: letter_id.to_string(),
    })
}
