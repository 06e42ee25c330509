//! tests/common.rs
//! Shared test key, known-good vectors and a TEST-ONLY encryption helper

#![allow(dead_code)] // Each test file uses a different subset

use ecies_sha256::aliases::SharedSecret32;
use ecies_sha256::consts::PUBLIC_KEY_SIZE;
use ecies_sha256::decryptor::derive_session_keys;
use ecies_sha256::utils::base64url_decode;
use ecies_sha256::{
    agree, apply_keystream, compute_tag, public_key_x963, secret_key_from_bytes,
    secret_key_from_x963, SecretKey,
};
use serde::Deserialize;

/// Receiver key the vectors were encrypted to, as issued (JWK).
pub const TEST_JWK: &str = r#"{
  "kty": "EC",
  "kid": "Sales-312",
  "x": "ikFyJ4GC9j3pSLe4Lxxy9D78tO0UObhl7sMZmQ-kMtU",
  "y": "rD_WmtfZk5co4sQ0HsHzTUv7IyyEJSVqeJTGsOAXLV0",
  "crv": "P-256",
  "d": "S2_fFe03I1evWKQi7lw6Nh_LwrxKRj4x_99Ey8E0DLk"
}"#;

/// 16-byte plaintext, single KDF block.
pub const VECTOR_SHORT: &str = "BEuXNbveL7WOOU6MjpTIM0s16RIiqIT5cZCQtlQ0R2ftkCd5ErfAb6zJ64GrTRYG6GHQOu5a6vFXbEr0kTrWYmfSbY61hYZtj8AuoaF0YNblWDZu4BVSzcFqeHynUN_jQEtBTd-8ffWpjSZ4ruRCfXc";
pub const VECTOR_SHORT_PLAINTEXT: &[u8] = b"abcdefghijklmnop";

/// 25-byte plaintext, K2 ‖ K1 spans two KDF blocks.
pub const VECTOR_MEDIUM: &str = "BJICl8j1X3PZdkquQHwouSQuIqJRJmSr8Lamct7wMneHTv9cpAtIzr9h2VChqM_HWjR_hBE401Om92OJ05ETNav53XVeukTAXJwAcIoCdfp_P0JUF1aCAK2Eapm7MCgjvUCSp8R8xTHbkTluJl3pluNlwuCwnf4wm2A";
pub const VECTOR_MEDIUM_PLAINTEXT: &[u8] = b"abcdefghijklmnopqrstuvxyz";

/// Large binary plaintext, many KDF blocks.
pub const VECTOR_LARGE: &str = concat!(
    "BDveF6dxrc249PAfQsKI9Z0UELxd0gFYJlBaBgb8wNSp7jUTtBlJhIHc7tVIkqrURQ1MM3ZvpfK211IJM_RCYc9x",
    "jy_JL4SPfJMUPNLMkmoGh8uGwTChIbAha8OFu-vIMzJO9DzJ3g7aPSTY6j7wixSKqDLCULXBwekUL5HvTLOEaNvf",
    "eVmTCVMLelTv2zSPUd12gR8MFrNU0k-upEzHALhj5DqsM5a5CnOBhDQvQSmHRMQle20yK0yqe1vc25UL9Jglmv4C",
    "MnrRb8PRfzwlUnMPeKCwGafIkkLUZArbAfXJGVHT19g_KbjALtY4QcOJIyQ17AgHNnkmfgtbDhDoFxTXOJl4ihLB",
    "yHqtxbUttdr5Q4D-Fvyi39fEyBrW5G14QKdaffiQJ-ahun85RE9eNOGN85bw-jEEqPSTjqY58HfK8obyjRgDMTGY",
    "EBsYpS2kJU1dux3k7iOtpS8rz2glOQ3i5kw9uUHcOTU1MHqqUSUk8p-GhXUCSEnz6Lq-4vpb2B8IG9_J3cJ9O7MF",
    "qJkAT_BvNEm4sy4GrNBuAkoqOkMloilQRdQ3l3GYIs9NrXagRG89Mcvxj9BEFnwmZDwPQiSWOaCM2bdh9rT7ByBq",
    "UIZ906-bp7cO0rj7vhcS0fY9U_XY7RnQSbVHi2mYSY-z5GxueUX4usAYK1N4tWK7EkXUQA1lCraceFLyyqmKcwKv",
    "1WwBNoI9otZcUyEqQ4fIKL357CDJZipUwBBR6LBAxJ5-48ZpVvw07i5m2y-YymnWEBjqAbV4kcK3xmewBy3EB81e",
    "ph6R59rqL5Evi6AqbDvHm0kp_WdkCke4EoRm-2GOqOKS4ConsJ9l8btEv3CZFdsPF9-Q7siiO444nNu5WMQfa4Ez",
    "ZvrQrKw_jo_65oR0GJDOefYcsiYFRjfyVgKWTY2ekaYjPcuY4Yi69WUO7xIpHLoSY2JKHO65Pn7ZVro7KcGZcIRj",
    "DUmcfmq4FMkUF8QOUVywz1mFVCHMEe72T14rYlC64kJo1S9VhMAzb3_uWzy7RFwnIGHXYUc3rGEziyn6ZY6Iapt9",
    "5_Ya-AO6IH9X4F7W6XFRkPrIT7WDqmMpwdzxz90isgDCQ4Pt9XMkKSp2dJE7w_tEalGAossosIAjykSJ-8uESoPq",
    "Wv1YELvM1pLVioRIYcJ2NA",
);
pub const VECTOR_LARGE_PLAINTEXT: &str = concat!(
    "BxKW0bEhMZUwmVsylRWkBYXB9pgSUzuMMmf-Kxb8uCjPqsBAabuIAGSRdn7sZ0XYH7CcHdtBZZJJt9LMHQsgBzrv",
    "pFmhqf3oYCueHVG7SnCcqo4qL5WsfXShrbiRIyh59BHtOJgXcvYy7tfYUk60zdKd86MweAgA-6vCwbJLLVCe8lXQ",
    "cgwPWvvYEwQAeKnIzH5OqCRM7vt6wtblgibtzE1ItK25g6ZdctHzQnG0qeVInZuA9cjsJmAMgN9ISGyQCZyEfNcV",
    "ENdfYqI8PcEidTnG1TayrVqLcRMaBg-bgc9PE5DanDBCbiDKUjMCyv1_RjYNKgwB-8FFOqjgJ9O5kZAKcN--3yn7",
    "J1lEreGk9eJJXHry2uG4NseCIF2j84RosH_6JVQlgx55IGN-_h7IotJrNguV59xNtqTYktri3_eHTOE9W-IznzDw",
    "34oDWZTzor-DAt0SXskndA9U5w7s3WMxDisyT-sD-6VZjJ0z-KUwDNBk8k0wYAGYzJcpIicDhK-F_x0ECFeZy3H8",
    "_su-rCdi2jE7fbITf5CQ8sPHNCGfs9qrxZEGAWKF5ghaCDI25gCnbsMfnnGyDY_pHYBsWlwQfdm1qforvtCLHmo0",
    "YWT_-CpSt38am_2VbelhhZ0Q2MhsAd_W1DCrEr4p7K3uB7ie2Z3pctWbl3zADv-_usUkKxz5FsZ2JTv2JyQgoTbh",
    "jcx97lCrQ1YMKMC7KctgtcS6it6SHtjAE5v16EzV4NOs9Qg1hpdqDL2o8CtYCWgCMOvio2_qvXDuE8-ROokvKXcI",
    "QhJI09VWW5-108XI9MdWqiR6LY_Gqhg1NNC1X511BiF-g_onmi1wcwxf8Xe3GRa7pgExVsw49LIT0A9cnPaiC80p",
    "IR2IgdbZ5o8d6k4Dxd94dkOF4H53kLcxnu6HRUuXQ3jmGPDFPavfEdOr_uKr1PAFDwdhf6rdYJI7ERwNM7hNQZoQ",
    "mrWqCkSWW2crEIUa7Bmko-qvK8Ys7MFzAwdBejJuLMnSj_LbqjBGWU-aA5GQrffIKYis",
);

/// A valid scalar that is not the test key.
pub const OTHER_SCALAR: [u8; 32] = [0x11; 32];

/// Ephemeral scalar used by [`encrypt_for_test`].
pub const EPHEMERAL_SCALAR: [u8; 32] = [0x42; 32];

#[derive(Debug, Deserialize)]
pub struct JwkPrivateKey {
    pub kty: String,
    pub kid: String,
    pub crv: String,
    pub x: String,
    pub y: String,
    pub d: String,
}

impl JwkPrivateKey {
    /// `0x04 ‖ X ‖ Y ‖ D`
    pub fn x963(&self) -> Vec<u8> {
        let mut out = vec![0x04];
        out.extend(base64url_decode(&self.x).unwrap());
        out.extend(base64url_decode(&self.y).unwrap());
        out.extend(base64url_decode(&self.d).unwrap());
        out
    }

    pub fn scalar(&self) -> Vec<u8> {
        base64url_decode(&self.d).unwrap()
    }

    pub fn public_x963(&self) -> Vec<u8> {
        self.x963()[..PUBLIC_KEY_SIZE].to_vec()
    }
}

pub fn test_jwk() -> JwkPrivateKey {
    serde_json::from_str(TEST_JWK).unwrap()
}

pub fn test_key() -> SecretKey {
    secret_key_from_x963(&test_jwk().x963()).unwrap()
}

pub fn other_key() -> SecretKey {
    secret_key_from_bytes(&OTHER_SCALAR).unwrap()
}

pub fn decode(text: &str) -> Vec<u8> {
    base64url_decode(text).unwrap()
}

/// All three vectors as (envelope, expected plaintext).
pub fn vectors() -> Vec<(Vec<u8>, Vec<u8>)> {
    vec![
        (decode(VECTOR_SHORT), VECTOR_SHORT_PLAINTEXT.to_vec()),
        (decode(VECTOR_MEDIUM), VECTOR_MEDIUM_PLAINTEXT.to_vec()),
        (decode(VECTOR_LARGE), decode(VECTOR_LARGE_PLAINTEXT)),
    ]
}

/// Deterministic encryption helper – TEST ONLY.
///
/// Mirrors the sender side of the profile with a fixed ephemeral scalar, built
/// from the crate's public primitives (ECDH is symmetric).
pub fn encrypt_for_test(
    recipient_public: &[u8; PUBLIC_KEY_SIZE],
    ephemeral_scalar: &[u8],
    plaintext: &[u8],
) -> Vec<u8> {
    let ephemeral = secret_key_from_bytes(ephemeral_scalar).unwrap();
    let ephemeral_public = public_key_x963(&ephemeral);
    let shared: SharedSecret32 = agree(&ephemeral, recipient_public).unwrap();

    let keys = derive_session_keys(&ephemeral_public, &shared, plaintext.len());
    let ciphertext = apply_keystream(plaintext, keys.key_stream());
    let tag = compute_tag(keys.mac_key(), &ciphertext);

    let mut envelope = ephemeral_public.to_vec();
    envelope.extend_from_slice(&ciphertext);
    envelope.extend_from_slice(&tag[..]);
    envelope
}
