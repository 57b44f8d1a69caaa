//! The Stack Exchange 2.2 endpoint catalogue.
//!
//! One record per leaf: semantic path, HTTP method and path template.
//! Templates are kept exactly as the upstream documentation spells them.

use crate::http::HttpMethod;

/// A single catalogue entry, as fed to `EndpointRegistry::from_table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRecord {
    pub path: &'static str,
    pub method: HttpMethod,
    pub template: &'static str,
}

const fn get(path: &'static str, template: &'static str) -> EndpointRecord {
    EndpointRecord {
        path,
        method: HttpMethod::Get,
        template,
    }
}

const fn post(path: &'static str, template: &'static str) -> EndpointRecord {
    EndpointRecord {
        path,
        method: HttpMethod::Post,
        template,
    }
}

pub const ENDPOINTS: &[EndpointRecord] = &[
    // access_tokens
    get("access_tokens.inspect", "access-tokens/{access_tokens}"),
    post("access_tokens.invalidate", "access-tokens/{access_tokens}/invalidate"),
    post("access_tokens.de_auth", "apps/{access_tokens}/de-authenticate"),
    // answers
    get("answers.all", "answers"),
    get("answers.by_id.all", "answers/{ids}"),
    get("answers.by_id.comments", "answers/{id}/comments"),
    get("answers.by_id.flags.options", "answers/{id}/flags/options"),
    get("answers.by_id.questions", "answers/{ids}/questions"),
    post("answers.by_id.accept.cast", "answers/{id}/accept"),
    post("answers.by_id.accept.undo", "answers/{id}/accept/undo"),
    post("answers.by_id.delete", "answers/{id}/delete"),
    post("answers.by_id.downvote.cast", "answers/{id}/downvote"),
    post("answers.by_id.downvote.undo", "answers/{id}/downvote/undo"),
    post("answers.by_id.edit", "answers/{id}/edit"),
    post("answers.by_id.flags.add", "answers/{id}/flags/add"),
    post("answers.by_id.upvote.cast", "answers/{id}/upvote"),
    post("answers.by_id.upvote.undo", "answers/{id}/upvote/undo"),
    // badges
    get("badges.all", "badges"),
    get("badges.by_id.all", "badges/{ids}"),
    get("badges.by_id.recipients", "badges/{ids}/recipients"),
    get("badges.name", "badges/name"),
    get("badges.recipients", "badges/recipients"),
    get("badges.tags", "badges/tags"),
    // comments
    get("comments.all", "comments"),
    get("comments.by_id.all", "comments/{ids}"),
    get("comments.by_id.flags.options", "comments/{id}/flags/options"),
    post("comments.by_id.delete", "comments/{id}/delete"),
    // upstream documents edit under the delete route
    post("comments.by_id.edit", "comments/{id}/delete"),
    post("comments.by_id.flags.add", "comments/{id}/flags/add"),
    post("comments.by_id.upvote.cast", "comments/{id}/upvote"),
    post("comments.by_id.upvote.undo", "comments/{id}/upvote/undo"),
    // errors
    get("errors.all", "errors"),
    get("errors.by_id", "errors/{id}"),
    get("events", "events"),
    // filters
    get("filters.create", "filters/create"),
    get("filters.decode", "filters/{filter}"),
    // inbox
    get("inbox.all", "inbox"),
    get("inbox.unread", "inbox/unread"),
    // notifications
    get("notifications.all", "notifications"),
    get("notifications.unread", "notifications/unread"),
    // posts
    get("posts.all", "posts"),
    get("posts.by_id.all", "posts/{ids}"),
    get("posts.by_id.comments.all", "posts/{ids}/comments"),
    get("posts.by_id.revisions", "posts/{ids}/revisions"),
    get("posts.by_id.suggested_edits", "posts/{ids}/suggested_edits"),
    post("posts.by_id.comments.add", "posts/{id}/comments/add"),
    post("posts.by_id.comments.render", "posts/{id}/comments/render"),
    get("privileges", "privileges"),
    get("revisions", "revisions/{ids}"),
    // search
    get("search.all", "search"),
    get("search.advanced", "search/advanced"),
    get("search.similar", "similar"),
    get("search.excerpts", "search/excerpts"),
    get("sites", "sites"),
    // suggested_edits
    get("suggested_edits.all", "suggested-edits"),
    get("suggested_edits.by_id", "suggested-edits/{ids}"),
    // tags
    get("tags.all", "tags"),
    get("tags.by_tag.info", "tags/{tags}/info"),
    get("tags.by_tag.faq", "tags/{tags}/faq"),
    get("tags.by_tag.related", "tags/{tags}/related"),
    get("tags.by_tag.synonyms", "tags/{tags}/synonyms"),
    get("tags.by_tag.top_answerers.all_time", "tags/{tags}/top-answerers/all_time"),
    get("tags.by_tag.top_answerers.month", "tags/{tags}/top-answerers/month"),
    get("tags.by_tag.wikis", "tags/{tags}/wikis"),
    get("tags.moderator_only", "tags/moderator-only"),
    get("tags.required", "tags/required"),
    get("tags.synonyms", "tags/synonyms"),
    // users
    get("users.all", "users"),
    get("users.by_id.all", "users/{ids}"),
    get("users.by_id.associated", "users/{ids}"),
    get("users.by_id.badges", "users/{ids}/badges"),
    get("users.by_id.comments.all", "users/{ids}/comments"),
    get("users.by_id.comments.to_id", "user/{ids}/comments/{to_id}"),
    get("users.by_id.favorites", "users/{ids}/mentioned"),
    get("users.by_id.inbox.all", "users/{ids}/inbox"),
    get("users.by_id.inbox.unread", "users/{ids}/inbox/unread"),
    get("users.by_id.merges", "users/{id}/merges"),
    get("users.by_id.network_activity", "users/{id}/network-activity"),
    get("users.by_id.notifications.all", "users/{id}/notifications"),
    get("users.by_id.notifications.unread", "users/{id}/notifications/unread"),
    get("users.by_id.posts", "users/{ids}/posts"),
    get("users.by_id.privileges", "users/{id}/privileges"),
    get("users.by_id.questions.all", "users/{ids}/questions"),
    get("users.by_id.questions.featured", "users/{ids}/questions/featured"),
    get("users.by_id.questions.no_answers", "users/{ids}/questions/no-answers"),
    get("users.by_id.questions.unaccepted", "users/{ids}/questions/unaccepted"),
    get("users.by_id.questions.unanswered", "users/{ids}/questions/unanswered"),
    get("users.by_id.reputation.recent", "users/{ids}/reputation"),
    get("users.by_id.reputation.history.public", "users/{id}/reputation-history"),
    get("users.by_id.reputation.history.full", "users/{id}/reputation-history/full"),
    get("users.by_id.suggested_edits", "users/{ids}/suggested-edits"),
    get("users.by_id.tags.all", "users/{id}/tags"),
    get("users.by_id.tags.by_tag.top_answers", "users/{id}/tags/{tags}/top-answers"),
    get("users.by_id.tags.by_tag.top_questions", "users/{id}/tags/{tags}/top-questions"),
    get("users.by_id.tags.top_tags.all", "user/{id}/top-tags"),
    get("users.by_id.tags.top_tags.answers", "user/{id}/top-answer-tags"),
    get("users.by_id.tags.top_tags.questions", "user/{id}/top-answer-tags"),
    get("users.by_id.timeline", "user/{id}s/timeline"),
    get("users.by_id.write_permissions", "users/{id}/write-permissions"),
    get("users.me.all", "me"),
    get("users.me.associated", "me"),
    get("users.me.badges", "me/badges"),
    get("users.me.comments.all", "me/comments"),
    get("users.me.comments.to_id", "user/{ids}/comments/{to_id}"),
    get("users.me.favorites", "me/mentioned"),
    get("users.me.inbox.all", "me/inbox"),
    get("users.me.inbox.unread", "me/inbox/unread"),
    get("users.me.merges", "me/merges"),
    get("users.me.network_activity", "me/network-activity"),
    get("users.me.notifications.all", "me/notifications"),
    get("users.me.notifications.unread", "me/notifications/unread"),
    get("users.me.posts", "me/posts"),
    get("users.me.privileges", "me/privileges"),
    get("users.me.questions.all", "me/questions"),
    get("users.me.questions.featured", "me/questions/featured"),
    get("users.me.questions.no_answers", "me/questions/no-answers"),
    get("users.me.questions.unaccepted", "me/questions/unaccepted"),
    get("users.me.questions.unanswered", "me/questions/unanswered"),
    get("users.me.reputation.recent", "me/reputation"),
    get("users.me.reputation.history.public", "me/reputation-history"),
    get("users.me.reputation.history.full", "me/reputation-history/full"),
    get("users.me.suggested_edits", "me/suggested-edits"),
    get("users.me.tags.all", "me/tags"),
    get("users.me.tags.by_tag.top_answers", "me/tags/{tags}/top-answers"),
    get("users.me.tags.by_tag.top_questions", "me/tags/{tags}/top-questions"),
    get("users.me.tags.top_tags.all", "user/{id}/top-tags"),
    get("users.me.tags.top_tags.answers", "user/{id}/top-answer-tags"),
    get("users.me.tags.top_tags.questions", "user/{id}/top-answer-tags"),
    get("users.me.timeline", "user/{ids}/timeline"),
    get("users.me.write_permissions", "me/write-permissions"),
    get("users.moderators.all", "users/moderators"),
    get("users.moderators.elected", "users/moderators/elected"),
    // questions
    get("questions.all", "questions"),
    get("questions.by_id.all", "questions/{ids}"),
    get("questions.by_id.answers.all", "questions/{ids}/answers"),
    get("questions.by_id.comments", "questions/{ids}/comments"),
    get("questions.by_id.flags.options", "questions/{id}/flags/options"),
    get("questions.by_id.linked", "questions/{id}/linked"),
    get("questions.by_id.related", "questions/{id}/related"),
    get("questions.by_id.timeline", "questions/{id}/timeline"),
    get("questions.featured", "questions/featured"),
    get("questions.no_answers", "questions/no-answers"),
    get("questions.unanswered.all", "questions/unanswered"),
    get("questions.unanswered.my_tags", "questions/unanswered/my-tags"),
    post("questions.by_id.answers.add", "questions/{ids}/answers/add"),
    post("questions.by_id.answers.render", "questions/{ids}/answers/render"),
    post("questions.by_id.close", "questions/{id}/close/options"),
    post("questions.by_id.delete", "questions/{id}/delete"),
    post("questions.by_id.downvote.cast", "questions/{id}/downvote"),
    post("questions.by_id.downvote.undo", "questions/{id}/downvote/undo"),
    post("questions.by_id.edit", "questions/{id}/edit"),
    post("questions.by_id.favorite.cast", "questions/{id}/favorite"),
    post("questions.by_id.favorite.undo", "questions/{id}/favorite/undo"),
    post("questions.by_id.flags.cast", "questions/{id}/flags/add"),
    post("questions.by_id.upvote.cast", "questions/{id}/upvote"),
    post("questions.by_id.upvote.undo", "questions/{id}/upvote/undo"),
    post("questions.add", "questions/add"),
    post("questions.render", "questions/render"),
];
