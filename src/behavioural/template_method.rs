//! Template method: a fixed recipe skeleton with customisable steps.

pub trait Recipe {
    fn prepare_ingredients(&self) -> String;
    fn cook(&self) -> String;
    fn serve(&self) -> String;

    /// The template: steps always run in this order.
    fn follow(&self) -> Vec<String> {
        vec![self.prepare_ingredients(), self.cook(), self.serve()]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cake;

impl Recipe for Cake {
    fn prepare_ingredients(&self) -> String {
        "Preparing the ingredients for the cake.".to_string()
    }

    fn cook(&self) -> String {
        "Baking the cake.".to_string()
    }

    fn serve(&self) -> String {
        "Serving the cake.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Soup;

impl Recipe for Soup {
    fn prepare_ingredients(&self) -> String {
        "Preparing the ingredients for the soup.".to_string()
    }

    fn cook(&self) -> String {
        "Cooking the soup.".to_string()
    }

    fn serve(&self) -> String {
        "Serving the soup.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_recipe_when_following_then_runs_steps_in_order() {
        assert_eq!(
            Soup.follow(),
            vec![
                "Preparing the ingredients for the soup.",
                "Cooking the soup.",
                "Serving the soup.",
            ]
        );
        assert_eq!(Cake.follow()[1], "Baking the cake.");
    }
}
