pub struct SignUpDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct SignInDto {
    pub email: String,
    pub password: String,
}

pub struct ResendVerificationDto {
    pub email: String,
}

pub struct PasswordResetDto {
    pub email: String,
}

/// The short-lived token carried by an emailed recovery link.
pub struct EnterRecoveryDto {
    pub access_token: String,
}

pub struct UpdatePasswordDto {
    pub password: String,
}
