use yew::prelude::*;

const TRUST_BADGES: [&str; 3] = ["Free Shipping", "30-Day Guarantee", "Eco-Friendly"];

/// Fully static closing call-to-action; no data dependency.
#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="py-24 bg-gradient-to-br from-primary via-accent to-primary">
            <div class="container mx-auto px-4 md:px-6">
                <div class="max-w-4xl mx-auto text-center space-y-8">
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-primary-foreground">
                        {"Ready to Transform Your Pencils?"}
                    </h2>

                    <p class="text-xl text-primary-foreground/90 max-w-2xl mx-auto">
                        {"Join thousands of satisfied customers who've already made the switch. \
                          Order your LambdaPen today and never waste a pencil again."}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="btn btn-secondary text-lg h-14 px-8 shadow-lg hover:shadow-xl transition-all">
                            {"Order Now - $19.99 →"}
                        </button>
                        <button class="btn btn-outline text-lg h-14 px-8 border-2 border-primary-foreground/30 text-primary-foreground">
                            {"View Demo Video"}
                        </button>
                    </div>

                    <div class="pt-8 flex items-center justify-center gap-6 text-primary-foreground/80 text-sm">
                        { for TRUST_BADGES.iter().map(|badge| html! {
                            <div class="flex items-center gap-2">
                                <i class="fas fa-check-circle"></i>
                                <span>{*badge}</span>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}
