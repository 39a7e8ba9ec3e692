mod main;

pub use main::{
    api_is_loaded, auth_instance, auth_is_loaded, current_user, is_signed_in, on_sign_in_change,
    sign_in, sign_out, user_auth_response, user_id, user_id_token, user_profile,
};
