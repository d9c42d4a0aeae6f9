use md5::{Digest, Md5};

/// Salt appended to every password before hashing for the login command.
///
/// The server hashes with the same literal, so it cannot change without a
/// coordinated protocol bump.
pub const LOGIN_SALT: &str = "Lx7#qR2!vN9@kT4$wZ1%";

/// Hashes a plaintext password the way the login command transmits it:
/// MD5 over `password ++ LOGIN_SALT`, rendered as 32 lowercase hex digits.
pub fn hash_login_password(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(LOGIN_SALT.as_bytes());
    let digest = hasher.finalize();

    digest.iter().map(|b| format!("{b:02x}")).collect()
}
