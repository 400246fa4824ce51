use rand::Rng;

const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
const SECRET_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_from(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}

/// 生成随机密码
pub fn generate_random_password(length: usize) -> String {
    generate_from(PASSWORD_CHARSET, length)
}

/// 生成随机签名密钥
pub fn generate_secret(length: usize) -> String {
    generate_from(SECRET_CHARSET, length)
}
