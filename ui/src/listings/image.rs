use api::ImageUpload;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub(crate) fn upload_from_file(file_name: &str, bytes: Vec<u8>) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content_type: content_type_for(file_name).to_string(),
        bytes,
    }
}

/// MIME type from the file extension; unknown types are sent as opaque bytes.
pub(crate) fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Inline `data:` URL so a picked file can be previewed before upload.
pub(crate) fn preview_url(image: &ImageUpload) -> String {
    format!(
        "data:{};base64,{}",
        image.content_type,
        STANDARD.encode(&image.bytes)
    )
}
