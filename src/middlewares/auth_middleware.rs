//! JWT 접근 필터 (Access Filter)
//!
//! 모든 요청에서 Bearer 토큰을 확인해 요청 범위 principal을 붙이거나, 익명으로 통과시키거나,
//! 401로 즉시 거절합니다.
//!
//! | 조건 | 결과 |
//! |------|------|
//! | 공개 경로 | 익명 통과 |
//! | `Authorization: Bearer ...` 없음 | 익명 통과 |
//! | 토큰 해석 실패 또는 사용자 조회 중 오류 | 401 `{"error":"Invalid or expired token"}`, 핸들러 미실행 |
//! | 활성 사용자 없음 | 익명 통과 |
//! | `is_valid` 거짓 (만료, 주체 불일치) | 익명 통과 |
//! | 그 외 | principal 부착 후 통과 |
//!
//! "로그인 필요" 여부는 필터가 아니라 핸들러의 [`AuthenticatedUser`] extractor가 판단합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::PublicRoutes;
use crate::middlewares::auth_inner::AccessFilterService;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;

#[derive(Clone)]
pub struct AccessFilter {
    token_service: Arc<TokenService>,
    users: Arc<dyn UserRepository>,
    public_routes: Arc<PublicRoutes>,
}

impl AccessFilter {
    pub fn new(
        token_service: Arc<TokenService>,
        users: Arc<dyn UserRepository>,
        public_routes: PublicRoutes,
    ) -> Self {
        Self {
            token_service,
            users,
            public_routes: Arc::new(public_routes),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessFilterService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessFilterService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            users: self.users.clone(),
            public_routes: self.public_routes.clone(),
        }))
    }
}
