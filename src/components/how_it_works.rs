use yew::prelude::*;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Insert Your Pencil",
        description: "Simply slide your short pencil into the LambdaPen holder until it \
            reaches the bottom.",
    },
    Step {
        number: "02",
        title: "Twist to Lock",
        description: "Give the extension a gentle twist to securely lock your pencil in place.",
    },
    Step {
        number: "03",
        title: "Write Away",
        description: "Enjoy comfortable, extended use with perfect balance and grip. Write as \
            if it's a new pencil!",
    },
];

/// Fully static three-step walkthrough; no data dependency.
#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="py-24">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">{"Simple as 1-2-3"}</h2>
                    <p class="text-xl text-muted-foreground">
                        {"Getting started with LambdaPen takes seconds. No tools, no mess, no fuss."}
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <div class="relative text-center">
                            {if index < STEPS.len() - 1 {
                                html! {
                                    <div class="hidden md:block absolute top-12 left-[60%] w-[80%] h-0.5 bg-gradient-to-r from-primary/50 to-transparent"></div>
                                }
                            } else {
                                html! {}
                            }}

                            <div class="relative">
                                <div class="w-24 h-24 mx-auto mb-6 rounded-full bg-gradient-to-br from-primary to-accent flex items-center justify-center shadow-lg">
                                    <span class="text-3xl font-bold text-primary-foreground">
                                        {step.number}
                                    </span>
                                </div>

                                <h3 class="text-2xl font-semibold mb-3">{step.title}</h3>
                                <p class="text-muted-foreground">{step.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
