//! 애플리케이션 상태 조립
//!
//! 설정과 저장소 구현을 받아 서비스들을 생성자 주입으로 엮고,
//! actix `App`에 `web::Data`로 등록합니다. 전역 레지스트리는 두지 않습니다.

use std::sync::Arc;

use actix_web::web;

use crate::config::{AppSettings, PublicRoutes};
use crate::core::clock::Clock;
use crate::middlewares::AccessFilter;
use crate::repositories::reset_tokens::ResetTokenRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::{
    AuthService, PasswordHasher, PasswordResetService, ResetTokenLedger, TokenService,
};
use crate::services::email::{EmailSender, PasswordResetEmailComposer};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub users: Arc<dyn UserRepository>,
    pub auth_service: Arc<AuthService>,
    pub password_reset_service: Arc<PasswordResetService>,
    pub user_service: Arc<UserService>,
    pub public_routes: PublicRoutes,
}

impl AppState {
    pub fn new(
        settings: &AppSettings,
        users: Arc<dyn UserRepository>,
        reset_tokens: Arc<dyn ResetTokenRepository>,
        email_sender: Arc<dyn EmailSender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let hasher = PasswordHasher::new(settings.bcrypt_cost);
        let token_service = Arc::new(TokenService::new(&settings.jwt, clock.clone()));
        let ledger = Arc::new(ResetTokenLedger::new(
            reset_tokens,
            clock.clone(),
            settings.password_reset.token_ttl,
        ));
        let composer = PasswordResetEmailComposer::new(
            settings.frontend.clone(),
            settings.password_reset.token_ttl,
        );

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            token_service.clone(),
            hasher,
            clock.clone(),
        ));
        let password_reset_service = Arc::new(PasswordResetService::new(
            users.clone(),
            ledger,
            hasher,
            email_sender,
            composer,
            clock,
        ));
        let user_service = Arc::new(UserService::new(users.clone()));

        Self {
            token_service,
            users,
            auth_service,
            password_reset_service,
            user_service,
            public_routes: settings.public_routes.clone(),
        }
    }

    pub fn access_filter(&self) -> AccessFilter {
        AccessFilter::new(
            self.token_service.clone(),
            self.users.clone(),
            self.public_routes.clone(),
        )
    }

    /// 핸들러가 `web::Data<...>`로 꺼내 쓸 서비스 등록
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.auth_service.clone()))
            .app_data(web::Data::from(self.password_reset_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.token_service.clone()));
    }
}
