use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Shared chrome around every page, plus the site-wide styles.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <Header />
            <div class="page-container">
                <main class="page-main">
                    { for props.children.iter() }
                </main>
                <Footer />
            </div>
            <style>
                {r#"
                :root {
                    --primary: #1A0B2E;
                    --secondary: #2C1250;
                    --accent: #7B2CBF;
                    --highlight: #3498db;
                }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: 'Inter', ui-sans-serif, system-ui, sans-serif;
                    background: linear-gradient(160deg, var(--primary) 0%, var(--secondary) 55%, var(--primary) 100%);
                    background-attachment: fixed;
                    color: #111827;
                }
                .app-shell {
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                }
                .page-container {
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    box-sizing: border-box;
                }
                .page-main { flex-grow: 1; }
                .section {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 0;
                }
                .section-title {
                    margin: 0 0 3rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    color: #fff;
                }
                .btn {
                    padding: 0.6rem 1.4rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s, background 0.3s;
                }
                .btn-primary {
                    color: #fff;
                    background: var(--accent);
                    border: 2px solid var(--accent);
                }
                .btn-primary:hover { background: #6a21a8; }
                .btn-outline {
                    color: #fff;
                    background: transparent;
                    border: 2px solid #fff;
                }
                .btn-outline:hover { background: rgba(255, 255, 255, 0.1); }
                .particles { position: absolute; inset: 0; pointer-events: none; }
                .particle {
                    position: absolute;
                    border-radius: 9999px;
                    background: #fff;
                    opacity: 0.1;
                    animation: float 6s ease-in-out infinite;
                }
                .particle.slow { animation-duration: 9s; }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
                @keyframes rise {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>
        </div>
    }
}
