mod common;

use axum::http::StatusCode;
use inclusion_backend::error::Error;
use inclusion_backend::models::{application::ApplyStatus, role::Role};
use inclusion_backend::repositories::application_repo;
use serde_json::{json, Value as JsonValue};

use common::{app, create_company, create_person, create_user, db_state, disability_ids, send};

fn vacancy_body(code: &str, company_id: i32, disabilities: &[i32]) -> JsonValue {
    json!({
        "code": code,
        "title": "Data Analyst",
        "description": "Analyse hiring data",
        "department": "People",
        "section": "Analytics",
        "shift": "morning",
        "publish_date": "2024-05-01",
        "registration_date": "2024-05-31",
        "area": "technology",
        "company_id": company_id,
        "contract_type": "clt",
        "disabilities": disabilities,
        "skills": ["sql", "excel"],
        "responsibilities": ["build dashboards"],
        "requirements": [{"requirement": "bachelor degree", "type": "obligatory"}]
    })
}

#[tokio::test]
async fn vacancy_aggregate_lifecycle() {
    let Some(state) = db_state().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let app = app(&state);

    let owner = create_user(&state, Role::Company).await;
    let company_id = create_company(&state.pool, &owner).await;
    let token = state.tokens.issue(&owner).unwrap();
    let tags = disability_ids(&state.pool, 2).await;
    let code = format!("VAC-{}", common::unique_suffix());

    // create
    let (status, body) = send(
        &app,
        "POST",
        "/vacancies",
        Some(&token),
        Some(vacancy_body(&code, company_id, &tags)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/vacancies/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    let detail = &body["data"];
    assert_eq!(detail["code"], code);
    assert_eq!(detail["company"], format!("Acme {}", owner.id));
    assert_eq!(detail["skills"], json!(["sql", "excel"]));
    assert_eq!(detail["responsibilities"], json!(["build dashboards"]));
    assert_eq!(
        detail["requirements"],
        json!([{"requirement": "bachelor degree", "type": "obligatory"}])
    );
    let mut tag_ids: Vec<i64> = detail["disabilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    tag_ids.sort();
    assert_eq!(tag_ids, tags.iter().map(|t| *t as i64).collect::<Vec<_>>());
    assert!(detail.get("candidate_already_applied").is_none());

    // full replace
    let mut replacement = vacancy_body(&code, company_id, &tags[..1]);
    replacement["skills"] = json!(["python"]);
    replacement["requirements"] = json!([
        {"requirement": "english", "type": "desirable"},
        {"requirement": "statistics", "type": "obligatory"}
    ]);
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/vacancies/{}", id),
        Some(&token),
        Some(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/vacancies/{}", id), None, None).await;
    let detail = &body["data"];
    assert_eq!(detail["skills"], json!(["python"]));
    assert_eq!(detail["requirements"].as_array().unwrap().len(), 2);
    assert_eq!(detail["disabilities"].as_array().unwrap().len(), 1);

    // listing by company and by disability tag
    let (status, body) = send(
        &app,
        "GET",
        &format!("/vacancies?company_id={}&disability={}", company_id, tags[0]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64().unwrap(), id);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/vacancies?company_id={}&disability={}", company_id, tags[1]),
        None,
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    // delete
    let (status, _) = send(&app, "DELETE", &format!("/vacancies/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &format!("/vacancies/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/vacancies/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failed_child_insert_rolls_back_the_whole_vacancy() {
    let Some(state) = db_state().await else {
        return;
    };
    let app = app(&state);

    let owner = create_user(&state, Role::Company).await;
    let company_id = create_company(&state.pool, &owner).await;
    let token = state.tokens.issue(&owner).unwrap();
    let code = format!("VAC-BAD-{}", common::unique_suffix());

    let (status, body) = send(
        &app,
        "POST",
        "/vacancies",
        Some(&token),
        Some(vacancy_body(&code, company_id, &[i32::MAX])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "failed to create the vacancy");
    assert_eq!(body["code"], "SVC-VACANCY-01");

    let vacancies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vacancies WHERE code = $1")
        .bind(&code)
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(vacancies, 0);

    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM vacancy_skills s LEFT JOIN vacancies v ON v.id = s.vacancy_id WHERE v.id IS NULL",
    )
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn unknown_company_is_rejected() {
    let Some(state) = db_state().await else {
        return;
    };
    let app = app(&state);
    let owner = create_user(&state, Role::Company).await;
    let token = state.tokens.issue(&owner).unwrap();
    let tags = disability_ids(&state.pool, 1).await;

    let (status, body) = send(
        &app,
        "POST",
        "/vacancies",
        Some(&token),
        Some(vacancy_body("VAC-NOCOMPANY", i32::MAX, &tags)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "company not found");
}

#[tokio::test]
async fn application_flow() {
    let Some(state) = db_state().await else {
        return;
    };
    let app = app(&state);

    let owner = create_user(&state, Role::Company).await;
    let company_id = create_company(&state.pool, &owner).await;
    let company_token = state.tokens.issue(&owner).unwrap();
    let tags = disability_ids(&state.pool, 1).await;
    let code = format!("VAC-APPLY-{}", common::unique_suffix());

    let (_, body) = send(
        &app,
        "POST",
        "/vacancies",
        Some(&company_token),
        Some(vacancy_body(&code, company_id, &tags)),
    )
    .await;
    let vacancy_id = body["data"]["id"].as_i64().unwrap();

    let candidate_user = create_user(&state, Role::User).await;
    let candidate_id = create_person(&state.pool, &candidate_user, "Centro").await;
    let apply = json!({"candidate_id": candidate_id, "vacancy_id": vacancy_id});

    let (status, _) = send(&app, "POST", "/vacancies/apply", None, Some(apply.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/vacancies/apply", None, Some(apply)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "the candidate already applied to the vacancy");

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM vacancy_applies WHERE vacancy_id = $1 AND candidate_id = $2",
    )
    .bind(vacancy_id as i32)
    .bind(candidate_id)
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);

    let (status, _) = send(
        &app,
        "POST",
        "/vacancies/apply",
        None,
        Some(json!({"candidate_id": candidate_id, "vacancy_id": i32::MAX})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/vacancies/{}?candidate_id={}", vacancy_id, candidate_id),
        None,
        None,
    )
    .await;
    assert_eq!(body["data"]["candidate_already_applied"], true);

    let (_, body) = send(
        &app,
        "GET",
        &format!(
            "/vacancies?company_id={}&candidate_id={}",
            company_id, candidate_id
        ),
        None,
        None,
    )
    .await;
    let listed = body["data"].as_array().unwrap();
    assert!(listed.iter().any(|v| v["id"].as_i64() == Some(vacancy_id)));

    let (status, body) = send(
        &app,
        "GET",
        &format!("/vacancies/apply/{}", vacancy_id),
        Some(&company_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let applications = body["data"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["status"], "applied");
    assert_eq!(applications[0]["candidate"]["id"].as_i64().unwrap(), candidate_id as i64);
    assert_eq!(applications[0]["candidate"]["email"], candidate_user.email);
    assert_eq!(applications[0]["candidate"]["address"]["neighborhood"], "Centro");
    let apply_id = applications[0]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/vacancies/apply/{}?status=approved", apply_id),
        Some(&company_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let status_now: ApplyStatus =
        sqlx::query_scalar("SELECT status FROM vacancy_applies WHERE id = $1")
            .bind(apply_id as i32)
            .fetch_one(&state.pool)
            .await
            .unwrap();
    assert_eq!(status_now, ApplyStatus::Approved);

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/vacancies/apply/{}?status=rejected", i32::MAX),
        Some(&company_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_applies_admit_exactly_one() {
    let Some(state) = db_state().await else {
        return;
    };
    let app = app(&state);

    let owner = create_user(&state, Role::Company).await;
    let company_id = create_company(&state.pool, &owner).await;
    let company_token = state.tokens.issue(&owner).unwrap();
    let tags = disability_ids(&state.pool, 1).await;
    let code = format!("VAC-RACE-{}", common::unique_suffix());
    let (_, body) = send(
        &app,
        "POST",
        "/vacancies",
        Some(&company_token),
        Some(vacancy_body(&code, company_id, &tags)),
    )
    .await;
    let vacancy_id = body["data"]["id"].as_i64().unwrap();

    let candidate_user = create_user(&state, Role::User).await;
    let candidate_id = create_person(&state.pool, &candidate_user, "Centro").await;
    let apply = json!({"candidate_id": candidate_id, "vacancy_id": vacancy_id});

    const ATTEMPTS: usize = 8;
    let mut handles = Vec::with_capacity(ATTEMPTS);
    for _ in 0..ATTEMPTS {
        let app = app.clone();
        let apply = apply.clone();
        handles.push(tokio::spawn(async move {
            send(&app, "POST", "/vacancies/apply", None, Some(apply)).await
        }));
    }

    let mut accepted = 0;
    let mut conflicts = 0;
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        match status {
            StatusCode::OK => accepted += 1,
            StatusCode::BAD_REQUEST => {
                assert_eq!(body["code"], "SVC-APPLY-01");
                conflicts += 1;
            }
            other => panic!("unexpected status {}: {}", other, body),
        }
    }
    assert_eq!(accepted, 1);
    assert_eq!(conflicts, ATTEMPTS - 1);

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM vacancy_applies WHERE vacancy_id = $1 AND candidate_id = $2",
    )
    .bind(vacancy_id as i32)
    .bind(candidate_id)
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);

    // A second insert past the pre-check is stopped by the unique index.
    let mut conn = state.pool.acquire().await.unwrap();
    let err = application_repo::insert(&mut conn, vacancy_id as i32, candidate_id)
        .await
        .unwrap_err();
    assert!(Error::is_unique_violation(&err));
}
