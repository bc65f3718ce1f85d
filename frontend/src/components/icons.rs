use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    VinScan,
    AiPricing,
    Quote,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let paths = match props.kind {
        IconKind::VinScan => html! {
            <>
                <path stroke-linecap="round" stroke-linejoin="round" d="M3.75 4.875c0-.621.504-1.125 1.125-1.125h4.5c.621 0 1.125.504 1.125 1.125v4.5c0 .621-.504 1.125-1.125 1.125h-4.5A1.125 1.125 0 013.75 9.375v-4.5zM3.75 14.625c0-.621.504-1.125 1.125-1.125h4.5c.621 0 1.125.504 1.125 1.125v4.5c0 .621-.504 1.125-1.125 1.125h-4.5a1.125 1.125 0 01-1.125-1.125v-4.5zM13.5 4.875c0-.621.504-1.125 1.125-1.125h4.5c.621 0 1.125.504 1.125 1.125v4.5c0 .621-.504 1.125-1.125 1.125h-4.5A1.125 1.125 0 0113.5 9.375v-4.5z" />
                <path stroke-linecap="round" stroke-linejoin="round" d="M6.75 6.75h.75v.75h-.75v-.75zM6.75 16.5h.75v.75h-.75v-.75zM16.5 6.75h.75v.75h-.75v-.75zM13.5 13.5h7.5v7.5h-7.5z" />
            </>
        },
        IconKind::AiPricing => html! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M12 18v-5.25m0 0a6.01 6.01 0 001.5-.189m-1.5.189a6.01 6.01 0 01-1.5-.189m3.75 7.478a12.06 12.06 0 01-4.5 0m3.75 2.311a15.045 15.045 0 01-7.5 0C4.508 19.64 2.25 15.184 2.25 10.5 2.25 5.816 4.508 1.36 8.25 1.36c3.742 0 6 4.456 6 9.14 0 4.684-2.258 9.14-6 9.14z" />
        },
        IconKind::Quote => html! {
            <path stroke-linecap="round" stroke-linejoin="round" d="M19.5 14.25v-2.625a3.375 3.375 0 00-3.375-3.375h-1.5A1.125 1.125 0 0113.5 7.125v-1.5a3.375 3.375 0 00-3.375-3.375H8.25m0 12.75h7.5m-7.5 3H12M10.5 2.25H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 00-9-9z" />
        },
    };

    html! {
        <svg class={props.class.clone()} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
            { paths }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
            <path d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5-10-5-10 5z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

// Mock dashboard shown under the hero copy.
#[function_component(AppPreview)]
pub fn app_preview() -> Html {
    html! {
        <svg class="app-preview" viewBox="0 0 800 450" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect width="800" height="450" rx="12" fill="#0F172A" />
            <rect x="20" y="20" width="150" height="410" rx="8" fill="#1E293B" />
            <rect x="40" y="40" width="90" height="10" rx="5" fill="#334155" />
            <rect x="40" y="70" width="110" height="8" rx="4" fill="#475569" />
            <rect x="40" y="90" width="70" height="8" rx="4" fill="#334155" />
            <rect x="40" y="110" width="100" height="8" rx="4" fill="#334155" />

            <rect x="190" y="20" width="590" height="60" rx="8" fill="#1E293B" />
            <rect x="210" y="40" width="200" height="20" rx="5" fill="#334155" />
            <rect x="720" y="40" width="40" height="20" rx="10" fill="#475569" />

            <rect x="190" y="100" width="285" height="150" rx="8" fill="#1E293B" />
            <rect x="210" y="120" width="100" height="10" rx="5" fill="#334155" />
            <rect x="210" y="150" width="245" height="80" rx="5" fill="#008171" fill-opacity="0.3" />
            <path d="M210 230 C 250 190, 290 210, 330 180 S 410 160, 455 190" stroke="#00ae98" stroke-width="3" fill="none" />

            <rect x="495" y="100" width="285" height="150" rx="8" fill="#1E293B" />
            <rect x="515" y="120" width="120" height="10" rx="5" fill="#334155" />
            <rect x="515" y="150" width="40" height="80" rx="5" fill="#334155" />
            <rect x="565" y="150" width="40" height="80" rx="5" fill="#475569" />
            <rect x="615" y="150" width="40" height="80" rx="5" fill="#334155" />
            <rect x="665" y="150" width="40" height="80" rx="5" fill="#475569" />

            <rect x="190" y="270" width="590" height="160" rx="8" fill="#1E293B" />
            <rect x="210" y="290" width="150" height="10" rx="5" fill="#334155" />
            <rect x="210" y="320" width="550" height="8" rx="4" fill="#475569" />
            <rect x="210" y="340" width="510" height="8" rx="4" fill="#334155" />
            <rect x="210" y="360" width="550" height="8" rx="4" fill="#334155" />
            <rect x="210" y="380" width="480" height="8" rx="4" fill="#334155" />
        </svg>
    }
}
