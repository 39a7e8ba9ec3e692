mod accessors;
mod signin;

pub use accessors::{
    api_is_loaded, auth_instance, auth_is_loaded, current_user, is_signed_in, on_sign_in_change,
    user_auth_response, user_id, user_id_token, user_profile,
};
pub use signin::{sign_in, sign_out};
