use actix_cors::Cors;
use actix_web::http::header;

/// CORS for the browser client: only the listed origins, only the methods
/// and headers the games API uses.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in origins
        .iter()
        .filter(|o| o.starts_with("http://") || o.starts_with("https://"))
    {
        cors = cors.allowed_origin(origin);
    }

    cors
}
