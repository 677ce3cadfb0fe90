use crate::controller::Intake;
use application::transfer::{
    EnterRecoveryDto, PasswordResetDto, ResendVerificationDto, SignInDto, SignUpDto,
    UpdatePasswordDto,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct ResendVerificationRequest {
    email: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    email: String,
}

#[derive(Debug, Deserialize)]
pub struct EnterRecoveryRequest {
    access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    password: String,
}

pub struct Transformer;

impl Intake<SignUpRequest> for Transformer {
    type To = SignUpDto;
    fn emit(
        &self,
        SignUpRequest {
            name,
            email,
            password,
        }: SignUpRequest,
    ) -> Self::To {
        SignUpDto {
            name,
            email,
            password,
        }
    }
}

impl Intake<SignInRequest> for Transformer {
    type To = SignInDto;
    fn emit(&self, SignInRequest { email, password }: SignInRequest) -> Self::To {
        SignInDto { email, password }
    }
}

impl Intake<ResendVerificationRequest> for Transformer {
    type To = ResendVerificationDto;
    fn emit(&self, ResendVerificationRequest { email }: ResendVerificationRequest) -> Self::To {
        ResendVerificationDto { email }
    }
}

impl Intake<PasswordResetRequest> for Transformer {
    type To = PasswordResetDto;
    fn emit(&self, PasswordResetRequest { email }: PasswordResetRequest) -> Self::To {
        PasswordResetDto { email }
    }
}

impl Intake<EnterRecoveryRequest> for Transformer {
    type To = EnterRecoveryDto;
    fn emit(&self, EnterRecoveryRequest { access_token }: EnterRecoveryRequest) -> Self::To {
        EnterRecoveryDto { access_token }
    }
}

impl Intake<UpdatePasswordRequest> for Transformer {
    type To = UpdatePasswordDto;
    fn emit(&self, UpdatePasswordRequest { password }: UpdatePasswordRequest) -> Self::To {
        UpdatePasswordDto { password }
    }
}
