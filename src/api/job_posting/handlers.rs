use actix_web::{
    get, post,
    web::{scope, Data, Json, ServiceConfig},
    HttpResponse, Responder,
};

use super::dto::{JobPostingResponse, ValidResponse};
use super::service::JobPostingService;
use crate::form::{FieldErrors, JobPostingDraft};

#[get("/options")]
async fn form_options(service: Data<JobPostingService>) -> impl Responder {
    HttpResponse::Ok().json(service.options())
}

#[post("/validate")]
async fn validate_draft(
    service: Data<JobPostingService>,
    draft: Json<JobPostingDraft>,
) -> Result<HttpResponse, FieldErrors> {
    service.check(&draft)?;
    Ok(HttpResponse::Ok().json(ValidResponse { valid: true }))
}

#[post("")]
async fn create_job_posting(
    service: Data<JobPostingService>,
    draft: Json<JobPostingDraft>,
) -> Result<HttpResponse, FieldErrors> {
    let job_posting = service.submit(draft.into_inner())?;

    Ok(HttpResponse::Created().json(JobPostingResponse {
        message: "Job posted successfully".to_string(),
        job_posting,
    }))
}

pub fn job_posting_config(config: &mut ServiceConfig) {
    config.service(
        scope("/job-postings")
            .service(form_options)
            .service(validate_draft)
            .service(create_job_posting),
    );
}
