//! AccessFilter 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::config::PublicRoutes;
use crate::core::errors::AppError;
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;
use crate::utils::string_utils::mask_email;

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

pub struct AccessFilterService<S> {
    pub service: Rc<S>,
    pub token_service: Arc<TokenService>,
    pub users: Arc<dyn UserRepository>,
    pub public_routes: Arc<PublicRoutes>,
}

impl<S, B> Service<ServiceRequest> for AccessFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();
        let users = self.users.clone();
        let public_routes = self.public_routes.clone();

        Box::pin(async move {
            match authenticate(&req, &public_routes, &token_service, users.as_ref()).await {
                Ok(Some(user)) => {
                    // 이미 principal이 있으면 덮어쓰지 않음
                    let already_attached = req.extensions().contains::<AuthenticatedUser>();
                    if !already_attached {
                        log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    log::warn!("인증 실패 ({} {}): {}", req.method(), req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({ "error": INVALID_TOKEN_MESSAGE }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Ok(None)`은 익명 통과, `Err`는 거절
async fn authenticate(
    req: &ServiceRequest,
    public_routes: &PublicRoutes,
    token_service: &TokenService,
    users: &dyn UserRepository,
) -> Result<Option<AuthenticatedUser>, AppError> {
    if public_routes.matches(req.path()) {
        return Ok(None);
    }

    let Some(token) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
    else {
        return Ok(None);
    };

    let claims = token_service.decode(token)?;

    let Some(user) = users.find_active_by_email(claims.subject()).await? else {
        log::debug!("토큰 주체가 활성 사용자가 아님: {}", mask_email(claims.subject()));
        return Ok(None);
    };

    if !token_service.is_valid(token, &user.email) {
        log::debug!("유효하지 않은 토큰, 익명으로 진행: {}", mask_email(&user.email));
        return Ok(None);
    }

    Ok(Some(AuthenticatedUser::from_user(&user)))
}
