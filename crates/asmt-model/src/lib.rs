pub mod assignment;
pub mod enums;
pub mod error;
pub mod ids;
pub mod media;
pub mod options;
pub mod question;
pub mod remote;

pub use assignment::AssignmentMeta;
pub use enums::{MediaKind, QuestionKind, RecordType};
pub use error::{ModelError, Result};
pub use ids::{IdAllocator, LocalId, ServerId};
pub use media::{FileInfo, MediaItem, PendingFile, PersistedMedia, PreviewRef};
pub use options::{DEFAULT_MAX_FILE_BYTES, UploadPolicy};
pub use question::{Answer, AnswerState, DeletedAnswer, Question, seed_answers};
pub use remote::{
    RemoteAnswer, RemoteAssignment, RemoteMedia, RemoteQuestion, RemoteQuestionType,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_from_remote_keeps_identity() {
        let persisted = PersistedMedia {
            asset_url: "https://cdn/x.png".to_string(),
            signed_url: "https://cdn/x.png?sig".to_string(),
            info: FileInfo {
                file_name: "x.png".to_string(),
                file_size_kb: 3,
                file_ext: "png".to_string(),
                file_type: "image/png".to_string(),
            },
        };
        let item = MediaItem::from_remote(ServerId::new(5), persisted);
        assert_eq!(item.server_id, Some(ServerId::new(5)));
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.record_type, RecordType::Update);
        assert_eq!(item.size_bytes, 3 * 1024);
        assert!(item.preview.is_none());
    }
}
