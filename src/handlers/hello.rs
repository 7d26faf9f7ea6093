use actix_web::{HttpResponse, Responder};

pub async fn welcome() -> impl Responder {
    let art = r#"
  ____ _     ___ _____ ____      _    ____  _____
 / ___| |   / _ \_   _|  _ \    / \  |  _ \| ____|
| |  _| |  | | | || | | |_) |  / _ \ | | | |  _|
| |_| | |__| |_| || | |  _ <  / ___ \| |_| | |___
 \____|_____\___/ |_| |_| \_\/_/   \_\____/|_____|

+ GloTrade API origin gate
+ Use /health to check the service
+ Use /cors/check?origin=<origin> to test an origin against the allow-list

"#;

    HttpResponse::Ok().content_type("text/plain").body(art)
}
