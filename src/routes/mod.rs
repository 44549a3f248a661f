//! API 라우트 설정 모듈
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/health` | 공개 |
//! | POST | `/auth/register` | 공개 |
//! | POST | `/auth/login` | 공개 |
//! | POST | `/auth/forgot-password` | 공개 |
//! | POST | `/auth/reset-password` | 공개 |
//! | GET | `/users/me` | principal 필요 |
//! | GET | `/users/{id}` | ADMIN |
//!
//! 공개 여부는 [`PublicRoutes`](crate::config::PublicRoutes) 설정을 따르며,
//! 토큰 검사는 앱 전체에 걸린 [`AccessFilter`](crate::middlewares::AccessFilter)가 담당합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(state.access_filter())
//!     .configure(|cfg| state.register(cfg))
//!     .configure(configure_all_routes)
//! ```

use actix_web::web;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 역직렬화 실패도 `{"error": ...}` 형태로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::forgot_password)
            .service(handlers::auth::reset_password)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_current_user)
            .service(handlers::users::get_user_by_id)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use chrono::Duration;

    use crate::core::clock::Clock;
    use crate::core::state::testing::test_context;
    use crate::handlers::auth::{FORGOT_PASSWORD_MESSAGE, RESET_PASSWORD_MESSAGE};
    use crate::domain::entities::users::User;
    use crate::domain::models::auth::Role;
    use crate::repositories::reset_tokens::ResetTokenRepository;
    use crate::repositories::users::UserRepository;

    macro_rules! test_app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .wrap($ctx.state.access_filter())
                    .configure(|cfg| $ctx.state.register(cfg))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn register_body(email: &str, password: &str) -> Value {
        json!({
            "email": email,
            "password": password,
            "firstName": "Ada",
            "lastName": "Lovelace"
        })
    }

    #[actix_web::test]
    async fn test_health_is_public() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_register_login_and_me() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/register")
                .set_json(register_body("a@x.com", "Secret1!"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "email": "a@x.com" }));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "email": "a@x.com", "password": "Secret1!" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap().to_string();

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/users/me")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["role"], "USER");
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_conflict() {
        let ctx = test_context();
        let app = test_app!(ctx);

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/auth/register")
                    .set_json(register_body("a@x.com", "Secret1!"))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), expected);
            if expected == StatusCode::CONFLICT {
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body["error"], "Email is already in use");
            }
        }
    }

    #[actix_web::test]
    async fn test_register_weak_password_is_bad_request() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/register")
                .set_json(register_body("a@x.com", "password"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request_with_error_body() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_login_bad_credentials_is_unauthorized() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "email": "ghost@x.com", "password": "Secret1!" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid credentials" }));
    }

    #[actix_web::test]
    async fn test_forgot_and_reset_password_flow() {
        let ctx = test_context();
        let app = test_app!(ctx);

        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/register")
                .set_json(register_body("a@x.com", "OldPass123!"))
                .to_request(),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/forgot-password")
                .set_json(json!({ "email": "a@x.com" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], FORGOT_PASSWORD_MESSAGE);

        let token = ctx.reset_tokens.snapshot()[0].token.clone();
        assert_eq!(ctx.mailer.sent().len(), 1);

        let reset = |token: String| {
            test::TestRequest::post()
                .uri("/auth/reset-password")
                .set_json(json!({ "token": token, "newPassword": "NewPass123!" }))
                .to_request()
        };

        let resp = test::call_service(&app, reset(token.clone())).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], RESET_PASSWORD_MESSAGE);

        let resp = test::call_service(&app, reset(token)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Token has already been used");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "email": "a@x.com", "password": "NewPass123!" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_forgot_password_unknown_email_gives_same_response() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/forgot-password")
                .set_json(json!({ "email": "ghost@x.com" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], FORGOT_PASSWORD_MESSAGE);
        assert!(ctx.reset_tokens.snapshot().is_empty());
        assert!(ctx.mailer.sent().is_empty());
    }

    #[actix_web::test]
    async fn test_reset_with_unknown_token_is_bad_request() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/reset-password")
                .set_json(json!({ "token": "not-a-uuid", "newPassword": "NewPass123!" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid token" }));
    }

    macro_rules! register_and_login {
        ($app:expr) => {{
            test::call_service(
                &$app,
                test::TestRequest::post()
                    .uri("/auth/register")
                    .set_json(register_body("a@x.com", "Secret1!"))
                    .to_request(),
            )
            .await;
            let resp = test::call_service(
                &$app,
                test::TestRequest::post()
                    .uri("/auth/login")
                    .set_json(json!({ "email": "a@x.com", "password": "Secret1!" }))
                    .to_request(),
            )
            .await;
            let body: Value = test::read_body_json(resp).await;
            body["token"].as_str().unwrap().to_string()
        }};
    }

    fn me_request(authorization: &str) -> test::TestRequest {
        test::TestRequest::get()
            .uri("/users/me")
            .insert_header(("Authorization", authorization.to_string()))
    }

    #[actix_web::test]
    async fn test_me_without_token_requires_authentication() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/users/me").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication required");
    }

    #[actix_web::test]
    async fn test_garbage_bearer_on_protected_route_is_rejected_by_filter() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(&app, me_request("Bearer not.a.jwt").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid or expired token" }));
    }

    #[actix_web::test]
    async fn test_garbage_bearer_on_public_route_passes() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/health")
                .insert_header(("Authorization", "Bearer not.a.jwt"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_is_anonymous() {
        let ctx = test_context();
        let app = test_app!(ctx);

        let resp = test::call_service(&app, me_request("Basic dXNlcjpwYXNz").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication required");
    }

    #[actix_web::test]
    async fn test_expired_token_degrades_to_anonymous() {
        let ctx = test_context();
        let app = test_app!(ctx);
        let token = register_and_login!(app);

        ctx.clock.advance(Duration::minutes(30));
        let resp = test::call_service(&app, me_request(&format!("Bearer {}", token)).to_request()).await;

        // 만료 토큰은 필터에서 거절되지 않고 extractor에서 401
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication required");
    }

    #[actix_web::test]
    async fn test_soft_deleted_user_degrades_to_anonymous() {
        let ctx = test_context();
        let app = test_app!(ctx);
        let token = register_and_login!(app);

        let user = ctx.users.find_active_by_email("a@x.com").await.unwrap().unwrap();
        ctx.users.soft_delete(&user.id.unwrap(), ctx.clock.now_bson()).await.unwrap();

        let resp = test::call_service(&app, me_request(&format!("Bearer {}", token)).to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication required");
    }

    async fn seed_user(ctx: &crate::core::state::testing::TestContext, email: &str, role: Role) -> User {
        let mut user = User::new_local(
            email.to_string(),
            "hash".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            ctx.clock.now_bson(),
        );
        user.role = role;
        ctx.users.create(user).await.unwrap()
    }

    #[actix_web::test]
    async fn test_user_lookup_by_id_requires_admin() {
        let ctx = test_context();
        let app = test_app!(ctx);
        let member = seed_user(&ctx, "member@x.com", Role::User).await;
        seed_user(&ctx, "admin@x.com", Role::Admin).await;
        let uri = format!("/users/{}", member.id_string().unwrap());

        let user_token = ctx.state.token_service.issue("member@x.com", Role::User).unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&uri)
                .insert_header(("Authorization", format!("Bearer {}", user_token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Access denied - insufficient permissions" }));

        let admin_token = ctx.state.token_service.issue("admin@x.com", Role::Admin).unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&uri)
                .insert_header(("Authorization", format!("Bearer {}", admin_token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "member@x.com");
    }

    #[actix_web::test]
    async fn test_user_lookup_by_id_without_token_is_unauthorized() {
        let ctx = test_context();
        let app = test_app!(ctx);
        let member = seed_user(&ctx, "member@x.com", Role::User).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/users/{}", member.id_string().unwrap()))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_reset_with_used_token_and_weak_password_reports_token_state() {
        let ctx = test_context();
        let app = test_app!(ctx);
        let user = seed_user(&ctx, "a@x.com", Role::User).await;
        let entry = crate::domain::entities::reset_tokens::PasswordResetToken::issue(
            user.id.unwrap(),
            ctx.clock.now_bson(),
            Duration::minutes(15),
        );
        let token = entry.token.clone();
        ctx.reset_tokens.insert(entry).await.unwrap();
        ctx.reset_tokens.consume_if_unused(&token, ctx.clock.now_bson()).await.unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/reset-password")
                .set_json(json!({ "token": token, "newPassword": "weak" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Token has already been used");
    }
}
