use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::api::job_posting::JobPostingService;

/// Liveness response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    postings_submitted: u64,
}

/// Liveness check endpoint
///
/// Simple check that the process is alive.
/// Use for Kubernetes liveness probes - restarts pod if this fails.
#[get("/live")]
async fn liveness_check(service: web::Data<JobPostingService>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        postings_submitted: service.submitted_count(),
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config.service(liveness_check);
}
