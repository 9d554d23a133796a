//! Articles resource

use super::{Context, Procedures, ResourceKind};
use crate::types::{Article, ArticleBase};

/// Article resource kind.
#[derive(Debug, Clone, Copy)]
pub struct ArticleResource;

impl ResourceKind for ArticleResource {
    type Entity = Article;
    type Base = ArticleBase;

    const NAME: &'static str = "article";

    const PROCEDURES: Procedures = Procedures {
        get: "getArticle",
        list: "getArticles",
        count: "getArticlesCount",
        create: "createArticle",
        update: "updateArticle",
        delete: "deleteArticle",
        id_param: "articleid",
    };
}

/// Articles resource.
///
/// ```no_run
/// # use gsales::{Client, Filter};
/// # async fn example(client: Client) -> gsales::Result<()> {
/// let article = client.articles().get(42).await?;
/// let cheap = client.articles().count(&[Filter::less_than("price", 10)]).await?;
/// # Ok(())
/// # }
/// ```
pub type Articles = Context<ArticleResource>;
