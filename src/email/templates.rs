//! Email subjects and bodies
//!
//! Dark-terminal HTML styled after the Lumeo landing page.

pub const WELCOME_SUBJECT: &str = "Access Granted :: Lumeo Early Access";

pub const CONFIRMED_SUBJECT: &str = "You're In! Welcome to Lumeo Early Access";

/// Welcome email body carrying the confirmation link
pub fn welcome_body(confirmation_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Lumeo - Access Granted</title></head>
<body style="margin:0;background:#000;font-family:'Courier New',monospace;color:#e5e5e5;">
  <div style="max-width:600px;margin:0 auto;background:#0a0a0a;border:1px solid #1a1a1a;">
    <div style="padding:40px 20px;border-bottom:1px solid #f97316;text-align:center;">
      <div style="color:#f97316;font-size:24px;letter-spacing:0.3em;font-weight:bold;">QORE // LABS</div>
    </div>
    <div style="padding:40px 30px;">
      <h1 style="font-size:28px;font-weight:normal;color:#fff;">Initiation Sequence Complete.</h1>
      <p style="line-height:1.8;font-size:14px;color:#888;">Welcome to the node network. Your request
      for early access has been <span style="color:#fff;">successfully registered</span>.</p>
      <p style="line-height:1.8;font-size:14px;color:#888;">Click the verification link below to
      confirm your position in the protocol queue. This ensures secure transmission of future signals.</p>
      <a href="{confirmation_url}" style="display:inline-block;background:#f97316;color:#000;padding:14px 28px;text-decoration:none;font-weight:bold;font-size:12px;letter-spacing:0.1em;">VERIFY ACCESS</a>
    </div>
    <div style="padding:30px;text-align:center;border-top:1px solid #1a1a1a;font-size:10px;color:#444;">
      QORE LABS<br>DECENTRALIZED SETTLEMENT LAYER
    </div>
  </div>
</body>
</html>"#
    )
}

/// Follow-up body sent once a signup is confirmed
pub fn confirmed_body() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Lumeo - Verification Complete</title></head>
<body style="margin:0;background:#000;font-family:'Courier New',monospace;color:#e5e5e5;">
  <div style="max-width:600px;margin:0 auto;background:#0a0a0a;border:1px solid #1a1a1a;">
    <div style="padding:40px 20px;border-bottom:1px solid #10b981;text-align:center;">
      <div style="color:#10b981;font-size:24px;letter-spacing:0.3em;font-weight:bold;">QORE // LABS</div>
    </div>
    <div style="padding:40px 30px;">
      <h1 style="font-size:28px;font-weight:normal;color:#fff;">Node Authenticated.</h1>
      <p style="line-height:1.8;font-size:14px;color:#888;">Your position in the protocol queue has
      been <span style="color:#10b981;">confirmed and secured</span>.</p>
      <p style="line-height:1.8;font-size:14px;color:#888;">Stay tuned for exclusive updates, beta
      access opportunities, and technical previews.</p>
    </div>
    <div style="padding:30px;text-align:center;border-top:1px solid #1a1a1a;font-size:10px;color:#444;">
      QORE LABS<br>DECENTRALIZED SETTLEMENT LAYER
    </div>
  </div>
</body>
</html>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_body_contains_link() {
        let body = welcome_body("http://localhost:3000/confirm?token=abc&email=a%40b.com");
        assert!(body.contains("http://localhost:3000/confirm?token=abc&email=a%40b.com"));
        assert!(body.contains("VERIFY ACCESS"));
    }
}
