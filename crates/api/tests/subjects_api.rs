//! HTTP-level integration tests for the `/subjects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use imagingpedia_db::models::question::CreateQuestion;
use imagingpedia_db::models::student::CreateStudent;
use imagingpedia_db::models::submission::CreateSubmission;
use imagingpedia_db::repositories::{QuestionRepo, StudentRepo, SubjectRepo, SubmissionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_subject(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/subjects", serde_json::json!({ "subject_name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// One question with one submission, plus one student.
async fn attach_dependents(pool: &PgPool, subject_id: i64) {
    let question = QuestionRepo::create(
        pool,
        &CreateQuestion {
            subject_id,
            question_text: "Which sequence shows fresh blood best?".to_string(),
        },
    )
    .await
    .unwrap();
    SubmissionRepo::create(
        pool,
        &CreateSubmission {
            question_id: question.id,
            answer_text: Some("SWI".to_string()),
        },
    )
    .await
    .unwrap();
    StudentRepo::create(
        pool,
        &CreateStudent {
            subject_id,
            student_name: "Ada".to_string(),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_subject_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/subjects",
        serde_json::json!({ "subject_name": "  Neuroradiology  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["subject_name"], "Neuroradiology");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_subject_requires_name(pool: PgPool) {
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "subject_name": "" }),
        serde_json::json!({ "subject_name": "   " }),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/subjects", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Subject name is required");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_duplicate_subject_ignoring_case_returns_400(pool: PgPool) {
    create_subject(&pool, "Anatomy").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/subjects", serde_json::json!({ "subject_name": "aNaToMy" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Subject already exists");
    assert_eq!(SubjectRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_subjects_sorted_by_name(pool: PgPool) {
    create_subject(&pool, "Physiology").await;
    create_subject(&pool, "Anatomy").await;
    create_subject(&pool, "Microbiology").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/subjects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["subject_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Anatomy", "Microbiology", "Physiology"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_subject_by_id(pool: PgPool) {
    let id = create_subject(&pool, "Get Me").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["subject_name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_subject_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/subjects/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Subject not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_subject_returns_message_and_subject(pool: PgPool) {
    let id = create_subject(&pool, "Delete Me").await;
    attach_dependents(&pool, id).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Subject and all related data deleted successfully"
    );
    assert_eq!(json["subject"]["id"], id);
    assert_eq!(json["subject"]["subject_name"], "Delete Me");

    assert!(QuestionRepo::list_by_subject(&pool, id)
        .await
        .unwrap()
        .is_empty());
    assert!(StudentRepo::list_by_subject(&pool, id)
        .await
        .unwrap()
        .is_empty());

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_returns_404_second_time(pool: PgPool) {
    let id = create_subject(&pool, "Once").await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/subjects/{id}")).await.status(),
        StatusCode::OK
    );

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Subject not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_failure_returns_500_with_store_message(pool: PgPool) {
    let id = create_subject(&pool, "Fragile").await;
    attach_dependents(&pool, id).await;

    sqlx::query(
        "CREATE FUNCTION fail_student_delete() RETURNS TRIGGER AS $$
         BEGIN
             RAISE EXCEPTION 'students are locked for audit';
         END;
         $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER trg_fail_student_delete
             BEFORE DELETE ON students
             FOR EACH STATEMENT EXECUTE FUNCTION fail_student_delete()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "students are locked for audit");

    // Rolled back: the subject and its question are still there.
    assert!(SubjectRepo::find_by_id(&pool, id).await.unwrap().is_some());
    assert_eq!(
        QuestionRepo::list_by_subject(&pool, id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_with_non_numeric_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/subjects/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"],
        "application/json",
        "rejection must use the JSON error contract"
    );
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_with_non_numeric_id_is_rejected_as_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/subjects/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}
