use actix_web::test::TestRequest;

const BOUNDARY: &str = "----storefront-test-boundary";

pub struct PhotoPart {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoPart {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            filename: "photo.png".to_string(),
            content_type: "image/png".to_string(),
            bytes,
        }
    }
}

/// Encodes text fields and an optional `photo` part as `multipart/form-data`.
pub fn multipart_request(
    req: TestRequest,
    fields: &[(&str, String)],
    photo: Option<PhotoPart>,
) -> TestRequest {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some(photo) = photo {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"photo\"; filename=\"{}\"\r\n",
                photo.filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", photo.content_type).as_bytes());
        body.extend_from_slice(&photo.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    req.insert_header((
        "Content-Type",
        format!("multipart/form-data; boundary={}", BOUNDARY),
    ))
    .set_payload(body)
}
