//! HTTP-level integration tests for the `/courses` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use imagingpedia_db::models::course::{CreateCourse, CreateCourseVideo};
use imagingpedia_db::repositories::CourseRepo;
use sqlx::PgPool;

fn new_course(name: &str) -> CreateCourse {
    CreateCourse {
        course_name: name.to_string(),
        course_description: Some(format!("{name} fundamentals")),
        course_image: None,
    }
}

fn new_video(course_id: i64, title: &str, sort_order: i32) -> CreateCourseVideo {
    CreateCourseVideo {
        course_id,
        title: title.to_string(),
        video_url: format!("https://videos.test/{}", title.to_lowercase()),
        duration: Some("12:30".to_string()),
        sort_order: Some(sort_order),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_courses_includes_video_counts(pool: PgPool) {
    let ct = CourseRepo::create(&pool, &new_course("CT Basics")).await.unwrap();
    CourseRepo::create(&pool, &new_course("MRI Physics")).await.unwrap();
    CourseRepo::add_video(&pool, &new_video(ct.id, "Intro", 0)).await.unwrap();
    CourseRepo::add_video(&pool, &new_video(ct.id, "Windowing", 1)).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/courses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let courses = json.as_array().unwrap();
    assert_eq!(courses.len(), 2);

    let ct_json = courses
        .iter()
        .find(|c| c["course_name"] == "CT Basics")
        .unwrap();
    assert_eq!(ct_json["video_count"], 2);
    assert_eq!(ct_json["course_description"], "CT Basics fundamentals");
    assert_eq!(ct_json["course_image"], "");

    let mri_json = courses
        .iter()
        .find(|c| c["course_name"] == "MRI Physics")
        .unwrap();
    assert_eq!(mri_json["video_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_course_with_ordered_videos(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("Ultrasound")).await.unwrap();
    CourseRepo::add_video(&pool, &new_video(course.id, "Doppler", 2)).await.unwrap();
    CourseRepo::add_video(&pool, &new_video(course.id, "Transducers", 1)).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/courses/{}", course.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["course_name"], "Ultrasound");
    assert_eq!(json["video_count"], 2);

    let titles: Vec<&str> = json["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Transducers", "Doppler"]);
    assert_eq!(json["videos"][0]["video_url"], "https://videos.test/transducers");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_course_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/courses/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Course not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_course_with_non_numeric_id_is_rejected_as_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/courses/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}
