use actix_web::HttpResponse;

pub(crate) async fn get() -> HttpResponse {
    HttpResponse::Ok().body("OK\n")
}
