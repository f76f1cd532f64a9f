//! Message ids and default texts of the OpenID Connect panel.
//!
//! The ids match the console's existing locale files, typos included
//! (`admin.gitab.clientSecretDescription`, `admin.opidc.tokenExample`):
//! renaming them would orphan every existing translation.

use sysconsole_core::ui::Message;

pub const TITLE: Message = Message::new("admin.authentication.oidc", "OpenID Connect");

pub const ENABLE_TITLE: Message = Message::new(
    "admin.oidc.enableTitle",
    "Enable authentication with OpenID Connect: ",
);
pub const ENABLE_DESCRIPTION: Message = Message::new(
    "admin.oidc.enableDescription",
    "When true, Mattermost allows team creation and account signup using OpenID Connect OAuth.",
);
pub const ENABLE_HTML_DESC: Message = Message::new(
    "admin.oidc.EnableHtmlDesc",
    "<ol><li>Log in to your OpenID Connect account and go to Profile Settings -> Applications.</li><li>Enter Redirect URIs \"<your-mattermost-url>/login/oidc/complete\" (example: http://localhost:8065/login/oidc/complete) and \"<your-mattermost-url>/signup/oidc/complete\". </li><li>Then use \"Application Secret Key\" and \"Application ID\" fields from OpenID Connect to complete the options below.</li><li>Complete the Endpoint URLs below. </li></ol>",
);

pub const CLIENT_ID_TITLE: Message = Message::new("admin.oidc.clientIdTitle", "Application ID:");
pub const CLIENT_ID_EXAMPLE: Message = Message::new(
    "admin.oidc.clientIdExample",
    "Ex \"jcuS8PuvcpGhpgHhlcpT1Mx42pnqMxQY\"",
);
pub const CLIENT_ID_DESCRIPTION: Message = Message::new(
    "admin.oidc.clientIdDescription",
    "Obtain this value via the instructions above for logging into OpenID Connect",
);

pub const CLIENT_SECRET_TITLE: Message =
    Message::new("admin.oidc.clientSecretTitle", "Application Secret Key:");
pub const CLIENT_SECRET_EXAMPLE: Message = Message::new(
    "admin.oidc.clientSecretExample",
    "Ex \"jcuS8PuvcpGhpgHhlcpT1Mx42pnqMxQY\"",
);
pub const CLIENT_SECRET_DESCRIPTION: Message = Message::new(
    "admin.gitab.clientSecretDescription",
    "Obtain this value via the instructions above for logging into OpenID Connect.",
);

pub const USER_TITLE: Message = Message::new("admin.oidc.userTitle", "User API Endpoint:");
pub const USER_EXAMPLE: Message = Message::new(
    "admin.oidc.userExample",
    "Ex \"https://<your-open-id-url>/oauth/user\"",
);
pub const USER_DESCRIPTION: Message = Message::new(
    "admin.oidc.userDescription",
    "Enter https://<your-open-id-url>/oauth/user.   Make sure you use HTTP or HTTPS in your URL depending on your server configuration.",
);

pub const AUTH_TITLE: Message = Message::new("admin.oidc.authTitle", "Auth Endpoint:");
pub const AUTH_EXAMPLE: Message = Message::new(
    "admin.oidc.authExample",
    "Ex \"https://<your-open-id-url>/oauth/authorize\"",
);
pub const AUTH_DESCRIPTION: Message = Message::new(
    "admin.oidc.authDescription",
    "Enter https://<your-open-id-url>/oauth/authorize (example https://example.com:3000/oauth/authorize).   Make sure you use HTTP or HTTPS in your URL depending on your server configuration.",
);

pub const TOKEN_TITLE: Message = Message::new("admin.oidc.tokenTitle", "Token Endpoint:");
pub const TOKEN_EXAMPLE: Message = Message::new(
    "admin.opidc.tokenExample",
    "Ex \"https://<your-open-id-url>/oauth/token\"",
);
pub const TOKEN_DESCRIPTION: Message = Message::new(
    "admin.oidc.tokenDescription",
    "Enter https://<your-open-id-url>/oauth/token.   Make sure you use HTTP or HTTPS in your URL depending on your server configuration.",
);
